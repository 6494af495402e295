// Candidate → job recommendation.
// keywords → tfidf → similarity → ranker is the pure core; catalog and handlers
// are the storage and HTTP edges around it.

pub mod catalog;
pub mod handlers;
pub mod keywords;
pub mod ranker;
pub mod similarity;
pub mod tfidf;
