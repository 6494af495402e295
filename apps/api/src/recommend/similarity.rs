use crate::recommend::keywords::extract_keywords;
use crate::recommend::tfidf::TfIdf;

/// Cosine of the angle between two equal-length vectors.
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

/// TF-IDF cosine similarity of `text_b` against the vocabulary of `text_a`.
pub fn compute_similarity(text_a: &str, text_b: &str) -> f64 {
    let mut corpus = TfIdf::new();
    let a = corpus.add_document(extract_keywords(Some(text_a)));
    let b = corpus.add_document(extract_keywords(Some(text_b)));

    let (vec_a, vec_b) = corpus.document_vectors(a, b);
    cosine(&vec_a, &vec_b)
}
