use std::sync::Arc;
use std::thread;

use fbs_amqp_codec::defines::*;
use fbs_amqp_codec::methods::*;
use fbs_amqp_codec::*;

amqp_method! {
    pub struct Ping("test.ping", 1000, 10) {
        pub sequence: u32,
    }
    synchronous: true,
    responses: [Pong],
}

amqp_method! {
    pub struct Pong("test.pong", 1000, 11) {
        pub sequence: u32,
    }
    synchronous: false,
    responses: [],
}

fn decode_ping(buffer: &[u8], config: &CodecConfig) -> Result<Box<dyn Method>, AmqpCodecError> {
    Ok(Box::new(Ping::unpack_with(buffer, config)?))
}

#[test]
fn builtin_methods_test() {
    let registry = MethodRegistry::amqp_0_9_1();

    assert_eq!(registry.len(), 37);
    assert!(registry.contains(BasicAck::ID));
    assert!(registry.contains(MethodId::new(AMQP_CLASS_CONNECTION, AMQP_METHOD_CONNECTION_START)));
    assert_eq!(registry.spec_of(QueueDeclare::ID).map(|spec| spec.name), Some("queue.declare"));
    assert!(!registry.contains(Ping::ID));

    assert!(MethodRegistry::new().is_empty());
    assert!(MethodRegistry::default().is_empty());
}

#[test]
fn decode_known_method_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let payload = BasicAck { delivery_tag: 5, multiple: false }.to_payload().unwrap();

    let frame = registry.decode(3, &payload).unwrap();
    assert_eq!(frame.channel, 3);
    assert_eq!(frame.method.id(), BasicAck::ID);
    assert_eq!(frame.method.name(), "basic.ack");
    assert_eq!(frame.downcast_ref::<BasicAck>(), Some(&BasicAck { delivery_tag: 5, multiple: false }));
}

#[test]
fn decode_unknown_method_test() {
    let registry = MethodRegistry::amqp_0_9_1();

    let result = registry.decode(1, &[0x27, 0x0F, 0x27, 0x0F]);
    assert_eq!(result.unwrap_err(), AmqpCodecError::UnknownMethod { class_id: 9999, method_id: 9999, offset: 0 });
}

#[test]
fn decode_short_header_test() {
    let registry = MethodRegistry::amqp_0_9_1();

    let result = registry.decode(1, &[0x00, 0x3C]);
    assert_eq!(result.unwrap_err(), AmqpCodecError::BufferTooShort { method: None, offset: 2, needed: 2, available: 0 });
}

#[test]
fn duplicate_registration_test() {
    let mut registry = MethodRegistry::amqp_0_9_1();

    let result = registry.register_method::<BasicAck>();
    assert_eq!(result, Err(AmqpCodecError::DuplicateMethod { class_id: 60, method_id: 80 }));
    assert_eq!(registry.len(), 37);
}

#[test]
fn custom_factory_test() {
    let mut registry = MethodRegistry::amqp_0_9_1();
    registry.register(1000, 10, decode_ping).unwrap();

    assert!(registry.contains(Ping::ID));
    assert!(registry.spec_of(Ping::ID).is_none());
    assert!(registry.register(1000, 10, decode_ping).is_err());

    let payload = Ping { sequence: 7 }.to_payload().unwrap();
    let frame = registry.decode(2, &payload).unwrap();
    assert_eq!(frame.downcast_ref::<Ping>(), Some(&Ping { sequence: 7 }));
}

#[test]
fn custom_method_type_test() {
    let mut registry = MethodRegistry::new();
    registry.register_method::<Ping>().unwrap();
    registry.register_method::<Pong>().unwrap();

    assert_eq!(registry.spec_of(Ping::ID).map(|spec| spec.responses), Some(&[Pong::ID][..]));

    let ping = Ping { sequence: 1 };
    let pong = registry.decode(0, &Pong { sequence: 1 }.to_payload().unwrap()).unwrap();
    assert!(registry.verify_response(&ping, pong.method.as_ref()).is_ok());
}

#[test]
fn verify_response_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let declare = QueueDeclare { queue: "jobs".to_string(), durable: true, ..Default::default() };

    assert_eq!(registry.responses_for(&declare), &[QueueDeclareOk::ID]);

    let reply = QueueDeclareOk { queue: "jobs".to_string(), message_count: 0, consumer_count: 0 };
    assert!(registry.verify_response(&declare, &reply).is_ok());

    let wrong = ExchangeDeclareOk {};
    assert_eq!(
        registry.verify_response(&declare, &wrong),
        Err(AmqpCodecError::UnexpectedResponse { request: QueueDeclare::ID, received: ExchangeDeclareOk::ID })
    );

    assert!(registry.responses_for(&BasicPublish::default()).is_empty());
}

#[test]
fn connection_handshake_responses_test() {
    let registry = MethodRegistry::amqp_0_9_1();

    assert_eq!(registry.responses_for(&ConnectionStart::default()), &[ConnectionStartOk::ID]);
    assert_eq!(registry.responses_for(&ConnectionTune::default()), &[ConnectionTuneOk::ID]);
    assert_eq!(registry.responses_for(&ConnectionOpen::default()), &[ConnectionOpenOk::ID]);
    assert_eq!(registry.responses_for(&ChannelClose::default()), &[ChannelCloseOk::ID]);
}

#[test]
fn frame_encode_test() {
    let frame = MethodFrame::new(1, BasicAck { delivery_tag: 5, multiple: false });

    let bytes = frame.encode(&CodecConfig::default()).unwrap();
    assert_eq!(bytes.len(), 21);
    assert_eq!(&bytes[..7], &[AMQP_FRAME_TYPE_METHOD, 0x00, 0x01, 0x00, 0x00, 0x00, 0x0D]);
    assert_eq!(&bytes[7..20], frame.method.to_payload().unwrap().as_slice());
    assert_eq!(bytes[20], AMQP_FRAME_END);
}

#[test]
fn frame_round_trip_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let frame = MethodFrame::new(7, BasicDeliver {
        consumer_tag: "ctag".to_string(),
        delivery_tag: 11,
        redelivered: false,
        exchange: "".to_string(),
        routing_key: "jobs".to_string(),
    });

    let mut bytes = frame.encode(registry.config()).unwrap();
    let length = bytes.len();
    bytes.extend_from_slice(&[AMQP_FRAME_TYPE_HEARTBEAT, 0x00, 0x00]);

    let (decoded, consumed) = registry.decode_frame(&bytes).unwrap();
    assert_eq!(consumed, length);
    assert_eq!(decoded, frame);
}

#[test]
fn frame_bad_end_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let mut bytes = MethodFrame::new(1, BasicAck::default()).encode(registry.config()).unwrap();
    bytes[20] = 0x00;

    assert_eq!(registry.decode_frame(&bytes).unwrap_err(), AmqpCodecError::InvalidFrameEnd { offset: 20, found: 0x00 });
}

#[test]
fn frame_bad_type_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let mut bytes = MethodFrame::new(1, BasicAck::default()).encode(registry.config()).unwrap();
    bytes[0] = AMQP_FRAME_TYPE_HEADER;

    assert_eq!(registry.decode_frame(&bytes).unwrap_err(), AmqpCodecError::InvalidFrameType { frame_type: AMQP_FRAME_TYPE_HEADER });
}

#[test]
fn frame_truncated_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let bytes = MethodFrame::new(1, BasicAck::default()).encode(registry.config()).unwrap();

    let result = registry.decode_frame(&bytes[..15]);
    assert_eq!(result.unwrap_err(), AmqpCodecError::BufferTooShort { method: None, offset: 7, needed: 14, available: 8 });
}

#[test]
fn frame_payload_error_offsets_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let mut bytes = MethodFrame::new(1, BasicCancelOk { consumer_tag: "ab".to_string() })
        .encode(registry.config())
        .unwrap();
    bytes[12] = 0xFF;

    let result = registry.decode_frame(&bytes);
    assert_eq!(result.unwrap_err(), AmqpCodecError::InvalidString { method: Some(BasicCancelOk::ID), offset: 12 });
}

#[test]
fn frame_max_test() {
    let frame = MethodFrame::new(1, BasicAck::default());

    let result = frame.encode(&CodecConfig::new().frame_max(20));
    assert!(matches!(result, Err(AmqpCodecError::FieldEncoding { method: "basic.ack", .. })));

    assert!(frame.encode(&CodecConfig::new().frame_max(21)).is_ok());
    assert!(frame.encode(&CodecConfig::new().frame_max(0)).is_ok());
}

#[test]
fn shared_between_threads_test() {
    let _ = tracing_subscriber::fmt::try_init();

    let registry = Arc::new(MethodRegistry::amqp_0_9_1());

    let workers: Vec<_> = (0..4u64).map(|worker| {
        let registry = registry.clone();
        thread::spawn(move || {
            for delivery_tag in 0..100u64 {
                let ack = BasicAck { delivery_tag: worker * 1000 + delivery_tag, multiple: false };
                let frame = registry.decode(worker as u16, &ack.to_payload().unwrap()).unwrap();
                assert_eq!(frame.downcast_ref::<BasicAck>(), Some(&ack));
            }
        })
    }).collect();

    for worker in workers {
        worker.join().unwrap();
    }
}

#[test]
fn boxed_method_clone_test() {
    let registry = MethodRegistry::amqp_0_9_1();
    let frame = registry.decode(1, &TxCommit {}.to_payload().unwrap()).unwrap();

    let copy = frame.clone();
    assert_eq!(copy, frame);
    assert!(copy.method.is::<TxCommit>());
    assert!(copy.method.expects_reply());
}

#[test]
fn frame_equality_test() {
    let ack = MethodFrame::new(1, BasicAck { delivery_tag: 5, multiple: false });

    assert_eq!(ack, MethodFrame::new(1, BasicAck { delivery_tag: 5, multiple: false }));
    assert_ne!(ack, MethodFrame::new(2, BasicAck { delivery_tag: 5, multiple: false }));
    assert_ne!(ack, MethodFrame::new(1, BasicAck { delivery_tag: 6, multiple: false }));
    assert_ne!(ack, MethodFrame::new(1, BasicReject { delivery_tag: 5, requeue: false }));
}

#[test]
fn registry_carries_config_test() {
    let config = CodecConfig::new().max_table_depth(3).frame_max(4096);
    let registry = MethodRegistry::amqp_0_9_1_with_config(config);

    assert_eq!(registry.config().max_table_depth, 3);
    assert_eq!(registry.config().frame_max, 4096);
    assert_eq!(registry.len(), 37);
}
