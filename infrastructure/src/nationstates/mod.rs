//! **NationStates API adapter**
//!
//! | Piece | Role | Key Dependency |
//! |-------|------|----------------|
//! | [`client::NationStatesClient`] | GET `api.cgi?{nation\|region}=<id>&q=<shard>` | `reqwest` |
//! | [`xml::extract_list`] | Pull the comma separated payload out of one element | `roxmltree` |
//!
//! The client implements [`NationApi`](endorse_application::NationApi) by
//! chaining the two: fetch the raw body, then extract the shard's tag.
//!
//! The API rejects requests without a descriptive `User-Agent`, so the
//! client sets one on every request. See
//! <https://www.nationstates.net/pages/api.html>.

pub mod client;
pub mod xml;
