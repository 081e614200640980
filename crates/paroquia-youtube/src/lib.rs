//! `YouTube` Data API client and the prioritized video feed aggregator.

pub mod aggregate;
pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use aggregate::{aggregate, Tier, TierSource};
pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use normalize::{normalize, VideoRecord};
pub use types::{BroadcastContent, BroadcastFilter, RawItem};
