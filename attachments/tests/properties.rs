//! Property-based tests for the attachment codecs.
//!
//! Arbitrary ids, quantities and transfer tables must survive both the wire
//! format and the JSON form unchanged, and the advertised size must always
//! match what the encoder writes.

use proptest::prelude::*;

use nova_attachments::appendix::{from_bytes, from_json, size, to_bytes, to_json};
use nova_attachments::attachment::*;

fn transfer() -> impl Strategy<Value = Transfer> {
    (any::<u64>(), any::<u64>(), any::<i64>()).prop_map(|(r, a, q)| Transfer::new(r, a, q))
}

fn placement() -> impl Strategy<Value = OrderPlacement> {
    (any::<u64>(), any::<u64>(), any::<i64>(), any::<i64>(), any::<u32>())
        .prop_map(|(c, a, q, p, e)| OrderPlacement::new(c, a, q, p, e))
}

mod wire_properties {
    use super::*;

    proptest! {
        /// Asset ids and signed quantities keep every bit.
        #[test]
        fn prop_asset_transfer_roundtrip(version in any::<u8>(), asset in any::<u64>(), quantity in any::<i64>()) {
            let mut transfer = AssetTransfer::new(AssetFields::new(asset, quantity));
            transfer.version = version;
            let bytes = to_bytes(&transfer).unwrap();
            prop_assert_eq!(bytes.len(), size(&transfer));
            prop_assert_eq!(from_bytes::<AssetTransfer>(&bytes).unwrap(), transfer);
        }

        #[test]
        fn prop_order_placement_roundtrip(order in placement()) {
            let bid = BidOrderPlacement::new(order);
            let bytes = to_bytes(&bid).unwrap();
            prop_assert_eq!(bytes.len(), 37);
            prop_assert_eq!(from_bytes::<BidOrderPlacement>(&bytes).unwrap(), bid);
        }

        /// Any table of up to 255 transfers encodes to 2 + 24n bytes and back.
        #[test]
        fn prop_multi_transfer_roundtrip(transfers in prop::collection::vec(transfer(), 0..=255)) {
            let n = transfers.len();
            let multi = AtomicMultiTransfer::new(transfers);
            let bytes = to_bytes(&multi).unwrap();
            prop_assert_eq!(bytes.len(), 2 + 24 * n);
            prop_assert_eq!(from_bytes::<AtomicMultiTransfer>(&bytes).unwrap(), multi);
        }

        /// URLs up to the one-byte prefix ceiling always encode.
        #[test]
        fn prop_issuance_roundtrip(
            url in "[a-z0-9:/.]{0,255}",
            hash in prop::array::uniform32(any::<u8>()),
            quantity in any::<u64>(),
            decimals in any::<u8>(),
            dilutable in any::<bool>()
        ) {
            let issuance = AssetIssuance::builder()
                .description_url(url)
                .description_hash(hash.to_vec())
                .quantity(quantity)
                .decimals(decimals)
                .dilutable(dilutable)
                .build()
                .unwrap();
            let bytes = to_bytes(&issuance).unwrap();
            prop_assert_eq!(bytes.len(), size(&issuance));
            prop_assert_eq!(from_bytes::<AssetIssuance>(&bytes).unwrap(), issuance);
        }

        /// Random bytes never panic the decoder.
        #[test]
        fn prop_garbage_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
            let _ = from_bytes::<AssetIssuance>(&bytes);
            let _ = from_bytes::<AtomicMultiTransfer>(&bytes);
            let _ = from_bytes::<AskOrderPlacement>(&bytes);
            let _ = from_bytes::<WhitelistAccountAddition>(&bytes);
        }
    }
}

mod json_properties {
    use super::*;

    proptest! {
        /// Unsigned ids above i64::MAX come back unchanged from JSON text.
        #[test]
        fn prop_whitelist_ids_survive_json_text(asset in any::<u64>(), account in any::<u64>(), end in any::<u32>()) {
            let add = WhitelistAccountAddition::new(asset, account, end);
            let text = serde_json::to_string(&to_json(&add)).unwrap();
            let map: nova_attachments::json::JsonMap = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(from_json::<WhitelistAccountAddition>(&map).unwrap(), add);
        }

        #[test]
        fn prop_order_placement_json(order in placement(), version in any::<u8>()) {
            let mut ask = AskOrderPlacement::new(order);
            ask.version = version;
            prop_assert_eq!(from_json::<AskOrderPlacement>(&to_json(&ask)).unwrap(), ask);
        }

        #[test]
        fn prop_multi_transfer_json(transfers in prop::collection::vec(transfer(), 0..16)) {
            let multi = AtomicMultiTransfer::new(transfers);
            prop_assert_eq!(from_json::<AtomicMultiTransfer>(&to_json(&multi)).unwrap(), multi);
        }
    }
}
