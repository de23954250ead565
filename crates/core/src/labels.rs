//! Fixed label taxonomies for the two classifiers.
//!
//! Label order is a versioned contract with the deployed model
//! artifacts: `label[i]` must correspond to the i-th dimension of the
//! model's output vector. Reordering either side without the other
//! silently corrupts every prediction, so these lists change only in
//! lockstep with a model artifact upload.

/// Registered name of the text-symptom classifier.
pub const DIAGNOSIS_MODEL: &str = "DIAGNOSIS_CLASSIFIER";

/// Registered name of the dementia image classifier.
///
/// The misspelling is part of the registered model name and must match
/// the artifact registration exactly.
pub const IMAGE_MODEL: &str = "ALZHEIRMER_IMG_CLASSIFIER";

/// Number of candidate diagnoses returned by the text endpoint.
pub const TOP_PREDICTIONS: usize = 4;

/// Output labels of the symptom classifier, in model output order.
pub const SYMPTOM_LABELS: [&str; 22] = [
    "drug reaction",
    "allergy",
    "chicken pox",
    "diabetes",
    "psoriasis",
    "hypertension",
    "cervical spondylosis",
    "bronchial asthma",
    "varicose veins",
    "malaria",
    "dengue",
    "arthritis",
    "impetigo",
    "fungal infection",
    "common cold",
    "gastroesophageal reflux disease",
    "urinary tract infection",
    "typhoid",
    "pneumonia",
    "peptic ulcer disease",
    "jaundice",
    "migraine",
];

/// Output labels of the image classifier, in model output order.
pub const DEMENTIA_LABELS: [&str; 4] = [
    "Mild demented",
    "Moderate demented",
    "Non demented",
    "Very mild demented",
];
