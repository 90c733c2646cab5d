pub mod list_fetch;
pub mod list_query;
pub mod notifications;
pub mod refetch;
pub mod session;
