//! # Extension Flows
//!
//! Read-time inheritance of submission history across declared extension
//! edges.

#[cfg(test)]
mod tests {
    use registry_runtime::RegistryConfig;
    use shared_types::{Cid, DaPointer};

    use crate::fixtures::{addr, registry, registry_with, word, VERIFYING_CONTRACT};

    #[tokio::test]
    async fn test_new_address_inherits_previous_history() {
        let registry = registry();
        let (caller, previous) = (addr(0xC0), addr(0xB0));
        let (h2, da2) = (word(0x22), word(0xD2));
        registry.submit(previous, h2, da2, vec![0xbe, 0xef]).await.unwrap();

        registry.extend(caller, previous).await.unwrap();

        assert_eq!(
            registry.get_all(&caller, &h2).unwrap(),
            vec![DaPointer::new(da2, Cid::from(vec![0xbe, 0xef]))]
        );
        assert_eq!(
            registry.get(&caller, &h2, &da2).unwrap(),
            Some(Cid::from(vec![0xbe, 0xef]))
        );
        // Direct reads never follow edges.
        assert!(registry.get_all_direct(&caller, &h2).is_empty());
        assert!(registry.get_direct(&caller, &h2, &da2).is_none());
    }

    #[tokio::test]
    async fn test_most_recent_edge_wins() {
        let registry = registry();
        let s = addr(0x01);
        let (older, newer) = (addr(0x02), addr(0x03));
        let (h, da) = (word(0x11), word(0xD1));
        registry.submit(older, h, da, vec![0x0a]).await.unwrap();
        registry.submit(newer, h, da, vec![0x0b]).await.unwrap();

        registry.extend(s, older).await.unwrap();
        registry.extend(s, newer).await.unwrap();

        assert_eq!(registry.extended_addresses(&s), vec![older, newer]);
        assert_eq!(registry.get(&s, &h, &da).unwrap(), Some(Cid::from(vec![0x0b])));
        assert_eq!(
            registry.get_all(&s, &h).unwrap(),
            vec![DaPointer::new(da, Cid::from(vec![0x0b]))]
        );
    }

    #[tokio::test]
    async fn test_older_edge_used_when_newer_has_nothing() {
        let registry = registry();
        let s = addr(0x01);
        let (older, newer) = (addr(0x02), addr(0x03));
        registry.submit(older, word(1), word(2), vec![0x0a]).await.unwrap();
        registry.extend(s, older).await.unwrap();
        registry.extend(s, newer).await.unwrap();

        assert_eq!(
            registry.get(&s, &word(1), &word(2)).unwrap(),
            Some(Cid::from(vec![0x0a]))
        );
    }

    #[tokio::test]
    async fn test_direct_records_shadow_inherited_listing() {
        let registry = registry();
        let (s, old) = (addr(0x01), addr(0x02));
        let h = word(0x11);
        registry.submit(old, h, word(0xD1), vec![0x01]).await.unwrap();
        registry.submit(old, h, word(0xD2), vec![0x02]).await.unwrap();
        registry.submit(s, h, word(0xD3), vec![0x03]).await.unwrap();
        registry.extend(s, old).await.unwrap();

        // Any direct listing hides the whole inherited listing.
        assert_eq!(
            registry.get_all(&s, &h).unwrap(),
            vec![DaPointer::new(word(0xD3), Cid::from(vec![0x03]))]
        );
        // Single-DA reads fall through per DA.
        assert_eq!(
            registry.get(&s, &h, &word(0xD1)).unwrap(),
            Some(Cid::from(vec![0x01]))
        );
    }

    #[tokio::test]
    async fn test_inheritance_is_transitive() {
        let registry = registry();
        let (a, b, c) = (addr(0x0A), addr(0x0B), addr(0x0C));
        registry.submit(c, word(1), word(2), vec![0x0c]).await.unwrap();
        registry.extend(a, b).await.unwrap();
        registry.extend(b, c).await.unwrap();

        assert_eq!(
            registry.get(&a, &word(1), &word(2)).unwrap(),
            Some(Cid::from(vec![0x0c]))
        );
    }

    #[tokio::test]
    async fn test_duplicate_and_self_edges_accepted() {
        let registry = registry();
        let (s, old) = (addr(0x01), addr(0x02));
        registry.extend(s, old).await.unwrap();
        registry.extend(s, old).await.unwrap();
        registry.extend(s, s).await.unwrap();

        assert_eq!(registry.extended_addresses(&s), vec![old, old, s]);
    }

    #[tokio::test]
    async fn test_cycles_terminate_without_a_hit() {
        let registry = registry();
        let (a, b) = (addr(0x0A), addr(0x0B));
        registry.extend(a, b).await.unwrap();
        registry.extend(b, a).await.unwrap();

        assert!(registry.get_all(&a, &word(1)).unwrap().is_empty());
        assert!(registry.get(&b, &word(1), &word(2)).unwrap().is_none());

        // A record reachable through the cycle is still found.
        registry.submit(b, word(1), word(2), vec![0x0b]).await.unwrap();
        assert_eq!(
            registry.get(&a, &word(1), &word(2)).unwrap(),
            Some(Cid::from(vec![0x0b]))
        );
    }

    #[tokio::test]
    async fn test_over_long_chain_fails_closed() {
        let mut config = RegistryConfig::with_verifying_contract(VERIFYING_CONTRACT);
        config.resolver.max_depth = 3;
        let registry = registry_with(config);

        for n in 1..=5u8 {
            registry.extend(addr(n), addr(n + 1)).await.unwrap();
        }
        registry.submit(addr(6), word(1), word(2), vec![0x06]).await.unwrap();

        let err = registry.get_all(&addr(1), &word(1)).unwrap_err();
        assert_eq!(err.kind(), "chain_too_deep");
        // Within the bound from a later starting point.
        assert_eq!(
            registry.get(&addr(3), &word(1), &word(2)).unwrap(),
            Some(Cid::from(vec![0x06]))
        );
    }

    #[tokio::test]
    async fn test_wide_fan_out_bounded_by_visited_limit() {
        let mut config = RegistryConfig::with_verifying_contract(VERIFYING_CONTRACT);
        config.resolver.max_visited = 8;
        let registry = registry_with(config);

        let root = addr(0x00);
        for n in 1..=20u8 {
            registry.extend(root, addr(n)).await.unwrap();
        }

        let err = registry.get_all(&root, &word(1)).unwrap_err();
        assert_eq!(err.kind(), "chain_too_deep");
    }
}
