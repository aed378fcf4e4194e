//! Request/response channel pairs

use crate::{error::Result, registry::Registry};

use super::named::Channel;

/// Suffix appended to the pair name for the request direction
pub const REQUEST_SUFFIX: &str = ".request";
/// Suffix appended to the pair name for the response direction
pub const RESPONSE_SUFFIX: &str = ".response";

/// Two named channels, one per direction, opened under a common name
#[derive(Debug)]
pub struct ChannelPair<Req, Resp> {
    pub requests: Channel<Req>,
    pub responses: Channel<Resp>,
}

impl<Req: Send + 'static, Resp: Send + 'static> ChannelPair<Req, Resp> {
    /// Open (or join) `"{name}.request"` and `"{name}.response"` in `registry`
    pub fn open(registry: &Registry, name: &str) -> Result<Self> {
        Ok(Self {
            requests: Channel::open(registry, &request_key(name))?,
            responses: Channel::open(registry, &response_key(name))?,
        })
    }

    /// Open (or join) the pair in the process-wide registry
    pub fn open_global(name: &str) -> Result<Self> {
        Self::open(crate::registry::global(), name)
    }
}

impl<Req, Resp> Clone for ChannelPair<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            responses: self.responses.clone(),
        }
    }
}

/// Registry key of the request direction of pair `name`
pub fn request_key(name: &str) -> String {
    format!("{}{}", name, REQUEST_SUFFIX)
}

/// Registry key of the response direction of pair `name`
pub fn response_key(name: &str) -> String {
    format!("{}{}", name, RESPONSE_SUFFIX)
}
