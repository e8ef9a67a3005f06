use futures::executor::block_on;

use super::*;
use crate::net::types::MemberMetadata;

#[test]
fn default_config_yields_working_loopback() {
    let provider = provider_for(&ClientConfig::default());
    let channel = provider.channel("chat-u1-1");
    assert_eq!(channel.name(), "chat-u1-1");

    let member = Member {
        user_id: "u1".to_owned(),
        metadata: MemberMetadata::default(),
    };
    block_on(async {
        channel.subscribe(&member).await.unwrap();
        assert_eq!(channel.presence().await.unwrap(), vec![member.clone()]);
    });
}

#[test]
fn channel_error_messages_name_the_channel() {
    let err = ChannelError::NotSubscribed("chat-u1-2".to_owned());
    assert_eq!(err.to_string(), "channel chat-u1-2 is not subscribed");
}
