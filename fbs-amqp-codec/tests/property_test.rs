use fbs_amqp_codec::methods::*;
use fbs_amqp_codec::*;
use proptest::prelude::*;

fn short_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.\\-_]{0,64}"
}

fn scalar_value() -> impl Strategy<Value = AmqpValue> {
    prop_oneof![
        Just(AmqpValue::Void),
        any::<bool>().prop_map(AmqpValue::Bool),
        any::<i8>().prop_map(AmqpValue::I8),
        any::<u8>().prop_map(AmqpValue::U8),
        any::<i16>().prop_map(AmqpValue::I16),
        any::<u16>().prop_map(AmqpValue::U16),
        any::<i32>().prop_map(AmqpValue::I32),
        any::<u32>().prop_map(AmqpValue::U32),
        any::<i64>().prop_map(AmqpValue::I64),
        (any::<u8>(), any::<u32>()).prop_map(|(scale, value)| AmqpValue::Decimal(scale, value)),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(AmqpValue::LongString),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(AmqpValue::ByteArray),
        any::<u64>().prop_map(AmqpValue::Timestamp),
    ]
}

fn table_from(entries: Vec<(String, AmqpValue)>) -> FieldTable {
    entries.into_iter().collect()
}

fn value() -> impl Strategy<Value = AmqpValue> {
    scalar_value().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(AmqpValue::FieldArray),
            prop::collection::vec((short_string(), inner), 0..8)
                .prop_map(|entries| AmqpValue::FieldTable(table_from(entries))),
        ]
    })
}

fn field_table() -> impl Strategy<Value = FieldTable> {
    prop::collection::vec((short_string(), value()), 0..12).prop_map(table_from)
}

proptest! {
    #[test]
    fn bits_round_trip_test(bits in prop::collection::vec(any::<bool>(), 0..64)) {
        let packed = BitPacker::pack(&bits);

        prop_assert_eq!(packed.len(), BitPacker::packed_len(bits.len()));
        prop_assert_eq!(BitPacker::unpack_all(&packed, bits.len()), Some(bits));
    }

    #[test]
    fn table_round_trip_test(table in field_table()) {
        let encoded = table.encode().unwrap();
        prop_assert_eq!(encoded.len(), table.encoded_size().unwrap());

        let (decoded, consumed) = FieldTable::decode(&encoded, 0).unwrap();
        prop_assert_eq!(consumed, encoded.len());
        prop_assert_eq!(decoded, table);
    }

    #[test]
    fn deliver_round_trip_test(
        consumer_tag in short_string(),
        delivery_tag in any::<u64>(),
        redelivered in any::<bool>(),
        exchange in short_string(),
        routing_key in short_string(),
        channel in any::<u16>(),
    ) {
        let registry = MethodRegistry::amqp_0_9_1();
        let deliver = BasicDeliver { consumer_tag, delivery_tag, redelivered, exchange, routing_key };

        let payload = deliver.to_payload().unwrap();
        prop_assert_eq!(payload.len(), deliver.payload_size().unwrap());

        let frame = registry.decode(channel, &payload).unwrap();
        prop_assert_eq!(frame.channel, channel);
        prop_assert_eq!(frame.downcast_ref::<BasicDeliver>(), Some(&deliver));
    }

    #[test]
    fn consume_round_trip_test(
        queue in short_string(),
        consumer_tag in short_string(),
        flags in prop::collection::vec(any::<bool>(), 4),
        arguments in field_table(),
    ) {
        let registry = MethodRegistry::amqp_0_9_1();
        let consume = BasicConsume {
            reserved_1: 0,
            queue,
            consumer_tag,
            no_local: flags[0],
            no_ack: flags[1],
            exclusive: flags[2],
            no_wait: flags[3],
            arguments,
        };

        let frame = MethodFrame::new(1, consume.clone());
        let bytes = frame.encode(registry.config()).unwrap();

        let (decoded, consumed) = registry.decode_frame(&bytes).unwrap();
        prop_assert_eq!(consumed, bytes.len());
        prop_assert_eq!(decoded.downcast_ref::<BasicConsume>(), Some(&consume));
        prop_assert_eq!(decoded.method.expects_reply(), !consume.no_wait);
    }
}
