use crate::{
    model::segment::{SegmentDefinition, SegmentNode, SegmentOperator, SegmentResourceType},
    server::{
        data::segment::SegmentRepository, error::AppError, model::segment::UpsertSegmentParam,
    },
};
use test_utils::{builder::TestBuilder, factory, fixture};
use uuid::Uuid;

mod delete;
mod upsert;

fn trait_definition(value: &str) -> SegmentDefinition {
    SegmentDefinition {
        entry_node: SegmentNode::Trait {
            id: "1".to_string(),
            path: "plan".to_string(),
            operator: SegmentOperator::Equals {
                value: value.to_string(),
            },
        },
        nodes: Vec::new(),
    }
}
