pub mod batch_heap;
pub mod indexed_heap;
pub mod priority_queue;

pub use batch_heap::BatchHeap;
pub use indexed_heap::IndexedHeap;
pub use priority_queue::MinQueue;
