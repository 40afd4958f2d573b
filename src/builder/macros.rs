//! Macros for declaring chain topologies.

/// Declare a topology as a [`ProcessBuilder`](crate::builder::ProcessBuilder).
///
/// Each entry reads `origin => target : probability @ cost`.
///
/// # Example
///
/// ```
/// use costchain::chain;
/// use costchain::random::FixedRandom;
///
/// let mut process = chain! {
///     states: 2;
///     0 => 1 : 0.6 @ 10.0,
///     0 => 0 : 0.4 @ 1.0,
/// }
/// .build_with_random(FixedRandom::new(0.5))
/// .unwrap();
///
/// process.step().unwrap();
/// assert_eq!(process.current_state_id(), 1);
/// ```
#[macro_export]
macro_rules! chain {
    (
        states: $n:expr;
        $(
            $origin:literal => $target:literal : $probability:literal @ $cost:literal
        ),* $(,)?
    ) => {
        $crate::builder::ProcessBuilder::new()
            .states($n)
            $(.transition($origin, $target, $probability, $cost))*
    };
}

#[cfg(test)]
mod tests {
    use crate::random::FixedRandom;

    #[test]
    fn chain_macro_builds_topology() {
        let process = chain! {
            states: 3;
            0 => 1 : 0.5 @ 1.0,
            0 => 2 : 0.5 @ -2.0,
            1 => 1 : 1.0 @ 0.0
        }
        .build_with_random(FixedRandom::new(0.9))
        .unwrap();

        assert_eq!(process.state(0).unwrap().num_transitions(), 2);
        assert!(process.state(1).unwrap().is_terminal());
        assert!(process.state(2).unwrap().is_terminal());
    }

    #[test]
    fn chain_macro_accepts_no_transitions() {
        let process = chain! { states: 4; }
            .build_with_random(FixedRandom::new(0.5))
            .unwrap();

        assert_eq!(process.num_states(), 4);
    }

    #[test]
    fn chain_macro_drives_steps() {
        let mut process = chain! {
            states: 2;
            0 => 1 : 0.5 @ 1.0,
            0 => 0 : 0.5 @ 2.0,
        }
        .build_with_random(FixedRandom::new(0.9))
        .unwrap();

        process.step().unwrap();

        assert_eq!(process.current_state_id(), 0);
        assert_eq!(process.total_cost(), 2.0);
    }
}
