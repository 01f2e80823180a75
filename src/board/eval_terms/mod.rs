//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Material and pawn placement
//! - Mobility and center control
//! - Pawn structure (doubled, isolated) and passed pawns
//! - King safety (pawn shield, nearby enemies, open king file)
//! - Rooks and queens on open files, bishop pair
//! - Threatened pieces
//!
//! Every term returns centipawns from White's perspective.

mod hanging;
mod helpers;
mod king_safety;
mod material;
mod minor_pieces;
mod mobility;
mod passed_pawns;
mod pawn_structure;
mod rooks;
pub mod tables;
