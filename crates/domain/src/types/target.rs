//! Push notification target actions

/// Action performed against the push targets API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetAction {
    /// Create a target and send to the segment defined by the payload.
    Create,
    /// Estimate reach without sending; delivered as `create` with
    /// `estimate_only` set.
    Estimate,
    /// List targets created through the API.
    List,
    /// Status and stats of one target.
    Result,
    /// Stop a running target.
    Stop,
}

crate::impl_wire_name_conversions!(TargetAction {
    Create => "create",
    Estimate => "estimate",
    List => "list",
    Result => "result",
    Stop => "stop",
});

impl TargetAction {
    pub const ALL: [Self; 5] = [Self::Create, Self::Estimate, Self::List, Self::Result, Self::Stop];

    /// Action the request is actually sent to.
    pub const fn wire_action(&self) -> Self {
        match self {
            Self::Estimate => Self::Create,
            other => *other,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("targets/{}.json", self.wire_action().as_str())
    }

    /// True for actions that require a full campaign payload.
    pub const fn requires_campaign(&self) -> bool {
        matches!(self, Self::Create | Self::Estimate)
    }
}
