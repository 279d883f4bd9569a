pub mod greedy;

pub use greedy::{ParseStrategyError, Strategy};
