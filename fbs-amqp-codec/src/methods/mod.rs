mod basic;
mod channel;
mod confirm;
mod connection;
mod exchange;
mod queue;
mod tx;

pub use basic::*;
pub use channel::*;
pub use confirm::*;
pub use connection::*;
pub use exchange::*;
pub use queue::*;
pub use tx::*;

use crate::registry::MethodEntry;

pub(crate) static AMQP_0_9_1_METHODS: &[MethodEntry] = &[
    MethodEntry::of::<ConnectionStart>(),
    MethodEntry::of::<ConnectionStartOk>(),
    MethodEntry::of::<ConnectionTune>(),
    MethodEntry::of::<ConnectionTuneOk>(),
    MethodEntry::of::<ConnectionOpen>(),
    MethodEntry::of::<ConnectionOpenOk>(),
    MethodEntry::of::<ConnectionClose>(),
    MethodEntry::of::<ConnectionCloseOk>(),
    MethodEntry::of::<ChannelOpen>(),
    MethodEntry::of::<ChannelOpenOk>(),
    MethodEntry::of::<ChannelFlow>(),
    MethodEntry::of::<ChannelFlowOk>(),
    MethodEntry::of::<ChannelClose>(),
    MethodEntry::of::<ChannelCloseOk>(),
    MethodEntry::of::<ExchangeDeclare>(),
    MethodEntry::of::<ExchangeDeclareOk>(),
    MethodEntry::of::<QueueDeclare>(),
    MethodEntry::of::<QueueDeclareOk>(),
    MethodEntry::of::<QueueBind>(),
    MethodEntry::of::<QueueBindOk>(),
    MethodEntry::of::<BasicQos>(),
    MethodEntry::of::<BasicQosOk>(),
    MethodEntry::of::<BasicConsume>(),
    MethodEntry::of::<BasicConsumeOk>(),
    MethodEntry::of::<BasicCancel>(),
    MethodEntry::of::<BasicCancelOk>(),
    MethodEntry::of::<BasicPublish>(),
    MethodEntry::of::<BasicDeliver>(),
    MethodEntry::of::<BasicAck>(),
    MethodEntry::of::<BasicReject>(),
    MethodEntry::of::<BasicNack>(),
    MethodEntry::of::<ConfirmSelect>(),
    MethodEntry::of::<ConfirmSelectOk>(),
    MethodEntry::of::<TxSelect>(),
    MethodEntry::of::<TxSelectOk>(),
    MethodEntry::of::<TxCommit>(),
    MethodEntry::of::<TxCommitOk>(),
];
