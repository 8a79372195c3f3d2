//! A sentinel-headed, singly-linked list of pieces.
//!
//! [`PieceList`] stores the consecutive segments of a piecewise structure. It
//! supports appending at the tail, a resettable cursor that can prune the piece
//! after it while walking, broadcasting a point to every piece, and building a
//! filtered copy through an [`EdgeConstraint`].
//!
//! ```
//! use piece_list::{Piece, PieceList};
//!
//! #[derive(Debug, PartialEq)]
//! struct Count(u32);
//!
//! impl Piece for Count {
//!     type Point = u32;
//!     fn add_point_and_penalty(&mut self, point: &u32) {
//!         self.0 += point;
//!     }
//! }
//!
//! let mut list: PieceList<Count> = [Count(1), Count(2), Count(3)].into_iter().collect();
//! list.broadcast_point_penalty(&10);
//!
//! list.reset_cursor();
//! let removed = list.delete_next_and_advance().unwrap();
//! assert_eq!(removed, Count(11));
//! assert_eq!(list.iter().map(|c| c.0).collect::<Vec<_>>(), vec![12, 13]);
//! ```

mod constraint;
mod errors;
mod handle;
mod node;
mod piece;
mod piece_list;

pub use constraint::{Admission, EdgeConstraint};
pub use errors::PieceListError;
pub use handle::Handle;
pub use piece::Piece;
pub use piece_list::{Iter, IterHandles, PieceList};
