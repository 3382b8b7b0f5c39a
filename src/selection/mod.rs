pub mod elitist;
pub mod tournament;

pub use elitist::ElitistSelection;
pub use tournament::TournamentSelection;
