use thiserror::Error;

use crate::model::NodeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("self-loop rejected: {0} -> {0}")]
    SelfLoop(NodeId),

    #[error("duplicate edge rejected: {0} -> {1}")]
    DuplicateEdge(NodeId, NodeId),

    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}
