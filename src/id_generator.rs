use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter shared by every element kind
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Hand out the next unique element id.
pub fn generate_id() -> usize {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = generate_id();
        let b = generate_id();
        assert!(b > a);
    }
}
