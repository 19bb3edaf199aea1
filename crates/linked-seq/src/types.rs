//! Sequence buffer contract.

/// Append-only, order-preserving sink.
///
/// Ordered trees fill one of these per traversal call and hand it back by
/// value, so any container that can `push_back` in call order will do.
pub trait SequenceBuffer<T> {
    fn push_back(&mut self, item: T);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> SequenceBuffer<T> for Vec<T> {
    fn push_back(&mut self, item: T) {
        self.push(item);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::SequenceBuffer;

    fn fill<S: SequenceBuffer<i32> + Default>(items: &[i32]) -> S {
        let mut out = S::default();
        for item in items {
            out.push_back(*item);
        }
        out
    }

    #[test]
    fn vec_is_a_sequence_buffer() {
        let out: Vec<i32> = fill(&[3, 1, 2]);
        assert_eq!(out, vec![3, 1, 2]);
        assert_eq!(SequenceBuffer::len(&out), 3);
        assert!(!SequenceBuffer::is_empty(&out));
        assert!(SequenceBuffer::is_empty(&fill::<Vec<i32>>(&[])));
    }
}
