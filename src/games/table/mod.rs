//! Reference table driver.
//!
//! Owns everything the rules engine deliberately does not: the deck, the
//! discard pile, dealing, reshuffling, the win check after each action and
//! the choices of automated seats.
//!
//! ```
//! use flip_out::core::GameConfig;
//! use flip_out::games::table::{PriorityPolicy, Table};
//!
//! let mut table = Table::new(
//!     GameConfig::default().with_seed(3),
//!     &[("Bot A", true), ("Bot B", true), ("Bot C", true)],
//! )
//! .unwrap();
//!
//! table.run_to_completion(&mut PriorityPolicy, 500).unwrap();
//! assert_eq!(table.cards_accounted_for(), table.cards_issued());
//! ```

mod policy;
mod driver;

pub use policy::{PlayerPolicy, PriorityPolicy, RandomPolicy};
pub use driver::{Table, TableBuilder, TableError, TurnReport};
