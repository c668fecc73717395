//! Transcript management for Fiat-Shamir heuristic

use crate::GroupElement;
use curve25519_dalek::scalar::Scalar;
use merlin::Transcript;

/// Extension trait for Transcript to add Bulletproofs-specific methods
pub trait TranscriptProtocol {
    /// Append a group element to the transcript
    fn append_point(&mut self, label: &'static [u8], point: &GroupElement);

    /// Challenge scalar from transcript
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl TranscriptProtocol for Transcript {
    fn append_point(&mut self, label: &'static [u8], point: &GroupElement) {
        self.append_message(label, point.compress().as_bytes());
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        Scalar::from_bytes_mod_order_wide(&buf)
    }
}

/// Create a new transcript for Bulletproofs with domain separation
pub fn bulletproofs_transcript(domain_label: &'static [u8]) -> Transcript {
    let mut transcript = Transcript::new(b"Bulletproofs");
    transcript.append_message(b"domain", domain_label);
    transcript
}
