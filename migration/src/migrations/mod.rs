pub mod m202608060001_create_metrics;
pub mod m202608060002_create_logs;
pub mod m202608060003_create_code_issues;
pub mod m202608060004_create_system_status;
