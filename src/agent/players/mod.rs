mod greedy;
mod human;
mod random;
mod search;

pub use greedy::GreedyAgent;
pub use human::HumanAgent;
pub use random::RandomAgent;
pub use search::SearchAgent;
