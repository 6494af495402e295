//! Ephemeral TF-IDF corpus.
//!
//! Built fresh for every comparison (candidate text vs one job text), so there
//! is no index to invalidate and nothing is shared between calls.

use std::collections::HashMap;

use crate::recommend::keywords::is_corpus_stopword;

/// One document: term counts plus the order in which terms first appeared.
#[derive(Debug, Default, Clone)]
struct Document {
    counts: HashMap<String, u32>,
    order: Vec<String>,
}

impl Document {
    fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut doc = Document::default();
        for term in terms {
            let term = term.as_ref();
            if is_corpus_stopword(term) {
                continue;
            }
            match doc.counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    doc.counts.insert(term.to_string(), 1);
                    doc.order.push(term.to_string());
                }
            }
        }
        doc
    }

    fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }
}

/// Weight breakdown for a single term of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub term: String,
    pub tf: u32,
    pub idf: f64,
    pub tfidf: f64,
}

#[derive(Debug, Default, Clone)]
pub struct TfIdf {
    documents: Vec<Document>,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document from its keyword sequence and returns its index.
    pub fn add_document<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.documents.push(Document::from_terms(terms));
        self.documents.len() - 1
    }

    /// Raw count of `term` in document `d`. Unknown documents count as empty.
    pub fn tf(&self, term: &str, d: usize) -> u32 {
        self.documents.get(d).map(|doc| doc.count(term)).unwrap_or(0)
    }

    /// `1 + ln(N / (1 + df))`.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.documents.len() as f64;
        let df = self
            .documents
            .iter()
            .filter(|doc| doc.counts.contains_key(term))
            .count() as f64;
        1.0 + (n / (1.0 + df)).ln()
    }

    pub fn tfidf(&self, term: &str, d: usize) -> f64 {
        let idf = self.idf(term);
        if !idf.is_finite() {
            return 0.0;
        }
        self.tf(term, d) as f64 * idf
    }

    /// Every term of document `d`, heaviest first. Equal weights keep
    /// first-occurrence order.
    pub fn list_terms(&self, d: usize) -> Vec<TermWeight> {
        let Some(doc) = self.documents.get(d) else {
            return Vec::new();
        };

        let mut terms: Vec<TermWeight> = doc
            .order
            .iter()
            .map(|term| TermWeight {
                term: term.clone(),
                tf: doc.count(term),
                idf: self.idf(term),
                tfidf: self.tfidf(term, d),
            })
            .collect();

        terms.sort_by(|a, b| b.tfidf.total_cmp(&a.tfidf));
        terms
    }

    /// Parallel weight vectors for documents `a` and `b`, indexed by the
    /// vocabulary of `a` only. Terms unique to `b` never contribute.
    pub fn document_vectors(&self, a: usize, b: usize) -> (Vec<f64>, Vec<f64>) {
        self.list_terms(a)
            .into_iter()
            .map(|w| {
                let other = self.tfidf(&w.term, b);
                (w.tfidf, other)
            })
            .unzip()
    }
}
