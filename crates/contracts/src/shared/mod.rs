pub mod work_order_filter;

pub use work_order_filter::WorkOrderFilter;
