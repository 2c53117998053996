//! Tests for rendering symbols and command-line limits

#[cfg(test)]
mod tests {
    use gridlattice::io::configuration::{
        DEFAULT_STEP_LIMIT, EXPANDED_GAP_SYMBOL, MAX_REPEAT, REGION_SYMBOL, UNREGISTERED_SYMBOL,
    };

    // Tests the region marker stands out from gap symbols
    // Verified by setting the region marker to a space
    #[test]
    fn test_symbols_are_distinguishable() {
        assert_ne!(REGION_SYMBOL, UNREGISTERED_SYMBOL);
        assert_ne!(REGION_SYMBOL, EXPANDED_GAP_SYMBOL);
        assert!(!REGION_SYMBOL.is_whitespace());
    }

    // Tests the limits for expanding grids
    // Verified by changing constant values
    #[test]
    fn test_expansion_limits() {
        assert_eq!(MAX_REPEAT, 64);
        assert_eq!(DEFAULT_STEP_LIMIT, 10_000);
    }
}
