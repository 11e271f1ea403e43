// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ksz8895::mock::MockSwitch;
use ksz8895::{Config, IndirectTable, Ksz8895, INDIRECT_DATA_MASK};
use proptest::prelude::*;

fn dev() -> Ksz8895<MockSwitch> {
    Ksz8895::new(MockSwitch::new(), Config::default())
}

fn table() -> impl Strategy<Value = IndirectTable> {
    prop_oneof![
        Just(IndirectTable::StaticMac),
        Just(IndirectTable::Vlan),
        Just(IndirectTable::DynamicMac),
    ]
}

proptest! {
    #[test]
    fn indirect_round_trip(
        selector in 0u8..16,
        index: u8,
        value in 0..=INDIRECT_DATA_MASK,
    ) {
        let mut dev = dev();
        dev.write_indirect(selector, index, value).unwrap();
        prop_assert_eq!(dev.read_indirect(selector, index), Ok(value));
        // Seven transactions each way
        prop_assert_eq!(dev.bus().log().len(), 14);
    }

    #[test]
    fn table_round_trip(
        table in table(),
        index in 0u16..1024,
        value in 0..=INDIRECT_DATA_MASK,
    ) {
        let mut dev = dev();
        dev.write_table(table, index, value).unwrap();
        prop_assert_eq!(
            dev.bus().table(table.selector(index), index as u8),
            value
        );
        prop_assert_eq!(dev.read_table(table, index), Ok(value));
    }

    #[test]
    fn oversized_values_are_rejected(value in (INDIRECT_DATA_MASK + 1)..) {
        let mut dev = dev();
        prop_assert!(dev.write_indirect(0, 0, value).is_err());
        prop_assert!(dev.bus().log().is_empty());
    }
}
