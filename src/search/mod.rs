//! Web search module for meeting-prep
//!
//! Search provider abstraction, the Serper client and graceful degradation.

mod client;
mod serper;

pub use client::{
    build_provider, company_query, industry_query, placeholder, search_or_placeholder,
    SearchError, SearchProvider,
};
pub use serper::SerperClient;
