//! Lock-free queues for handing values between cooperating threads.
//!
//! The crate provides [`spsc`], an unbounded single-producer
//! single-consumer FIFO built from a linked chain of nodes. Popped nodes
//! are recycled back to the producer through an in-chain cache, so
//! steady-state pushes allocate nothing and pops never allocate at all.
//! Node storage comes from a pluggable [`alloc::NodeAlloc`] collaborator.
//!
//! ```
//! use relay_queue::spsc;
//!
//! let (mut tx, mut rx) = spsc::unbounded::<String>();
//! tx.push("ping".to_owned()).unwrap();
//! assert_eq!(rx.pop().as_deref(), Some("ping"));
//! ```

pub mod alloc;
pub mod spsc;
