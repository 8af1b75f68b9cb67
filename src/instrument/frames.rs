//! Frame capacity accounting for injected sequences.

/// Adjust a method's declared frame capacity for an injected-sequence cost.
///
/// Returns `(max_stack + injected_cost, max_locals)`, or `None` when the sum
/// does not fit the class-file encoding. Locals never change: injected
/// sequences work purely on the operand stack and claim no local slots.
///
/// Called exactly once per method, at the point the capacity is finalized for
/// emission. The inputs are unsigned by type, mirroring the class-file
/// encoding, so a negative capacity is unrepresentable rather than checked.
///
/// # Examples
///
/// ```rust
/// use classweave::instrument::adjust_frame_budget;
///
/// assert_eq!(adjust_frame_budget(2, 1, 5), Some((7, 1)));
/// assert_eq!(adjust_frame_budget(u16::MAX, 1, 1), None);
/// ```
#[must_use]
pub fn adjust_frame_budget(
    max_stack: u16,
    max_locals: u16,
    injected_cost: u16,
) -> Option<(u16, u16)> {
    max_stack
        .checked_add(injected_cost)
        .map(|stack| (stack, max_locals))
}
