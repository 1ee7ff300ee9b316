pub mod add_item;
pub mod desk_flow;
