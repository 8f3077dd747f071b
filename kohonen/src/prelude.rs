//! This module reimports a common used types.

pub use crate::algorithms::som::generate_random_dataset;
pub use crate::algorithms::som::get_network_state;
pub use crate::algorithms::som::train;
pub use crate::algorithms::som::Coordinate;
pub use crate::algorithms::som::Input;
pub use crate::algorithms::som::Network;
pub use crate::algorithms::som::NetworkState;
pub use crate::algorithms::som::Node;
pub use crate::algorithms::som::SelectionMode;
pub use crate::algorithms::som::TerminationReason;
pub use crate::algorithms::som::TrainingConfig;
pub use crate::algorithms::som::TrainingReport;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::Random;
pub use crate::utils::SomError;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
