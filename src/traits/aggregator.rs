/// A trait that defines how per-scan values are folded into a result.
///
/// The `Item` type is what gets fed in once per scan.
/// The `Output` type is what is left once every scan was added.
///
/// The `add` method takes an item of type `Item` OR a type that
/// implements `Into<Item>`.
///
/// The `finalize` method consumes the aggregator and returns its output.
pub trait Aggregator: Send + Sync {
    type Item: Send + Sync + Clone;
    type Output: Send + Sync;

    fn add(&mut self, item: impl Into<Self::Item>);
    fn finalize(self) -> Self::Output;
}
