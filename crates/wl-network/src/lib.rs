//! wl-network: the water-leveling engine.
//!
//! A [`WaterNetwork`] owns a set of containers and the pipes between them.
//! Containers joined through any chain of pipes form a group, and every
//! member of a group holds the same liquid level once an operation returns:
//!
//! - adding water to a container spreads it evenly across its group
//! - connecting two groups pools their liquid at the mean level
//! - disconnecting leaves levels where they are and only stops future sharing
//!
//! # Example
//!
//! ```
//! use wl_core::ContainerId;
//! use wl_network::WaterNetwork;
//!
//! let net = WaterNetwork::new();
//! let (a, b) = (ContainerId::new(1), ContainerId::new(2));
//! net.add_container(a).unwrap();
//! net.add_container(b).unwrap();
//! net.add_water(a, 10.0).unwrap();
//! net.connect(a, b).unwrap();
//!
//! assert_eq!(net.level(a).unwrap(), 5.0);
//! assert_eq!(net.level(b).unwrap(), 5.0);
//! ```

pub mod error;
pub mod network;
pub(crate) mod state;
pub mod status;

pub use error::{NetworkError, NetworkResult};
pub use network::WaterNetwork;
pub use status::{ContainerStatus, NetworkStatus};
