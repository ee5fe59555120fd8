pub mod domains;
pub mod health;
pub mod logs;
pub mod status;

pub use domains::{
    create_domain, delete_domain, delete_record, get_domain, get_tlds, list_domains,
    upsert_record,
};
pub use health::health_check;
pub use logs::get_logs;
pub use status::{get_status, start_dns, stop_dns};
