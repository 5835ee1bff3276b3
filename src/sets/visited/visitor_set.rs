/// A membership set over dense node indices.
pub trait VisitorSet {
    fn get(&self, i: usize) -> bool;

    /// Marks `i` as a member. Returns `true` if `i` was not a member before.
    fn set(&mut self, i: usize) -> bool;
}
