//! Tests for named channels

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::channel::named::*;
    use crate::channel::pair::*;
    use crate::error::RendezvousError;
    use crate::queue::PollConfig;
    use crate::registry::Registry;

    #[test]
    fn test_open_same_key_joins() {
        let registry = Registry::new();
        let tx = Channel::<u32>::open(&registry, "chan").unwrap();
        let rx = Channel::<u32>::open(&registry, "chan").unwrap();

        assert!(Channel::same_channel(&tx, &rx));
        assert_eq!(Channel::endpoint_count(&tx), 2);
        assert_eq!(rx.key(), "chan");

        tx.send(7);
        assert_eq!(rx.try_recv(), Some(7));
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn test_channel_element_type_is_checked() {
        let registry = Registry::new();
        let _ints = Channel::<u32>::open(&registry, "typed").unwrap();

        let err = Channel::<String>::open(&registry, "typed").unwrap_err();
        assert!(matches!(err, RendezvousError::TypeMismatch { .. }));
    }

    #[test]
    fn test_channel_torn_down_with_last_endpoint() {
        let registry = Registry::new();
        let tx = Channel::<u32>::open(&registry, "short").unwrap();
        tx.send(1);
        drop(tx);

        assert!(!registry.contains("short"));
        let fresh = Channel::<u32>::open(&registry, "short").unwrap();
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_recv_with_timeout() {
        let registry = Registry::new();
        let rx = Channel::<u8>::open(&registry, "idle").unwrap();
        let config = PollConfig::new().with_timeout(Duration::from_millis(5));

        assert!(matches!(rx.recv(&config), Err(RendezvousError::Timeout { .. })));

        rx.send(3);
        assert_eq!(rx.recv(&config).unwrap(), 3);
    }

    #[test]
    fn test_pair_keys_and_directions() {
        let registry = Registry::new();
        let client = ChannelPair::<String, usize>::open(&registry, "len").unwrap();
        let server = ChannelPair::<String, usize>::open(&registry, "len").unwrap();

        assert_eq!(client.requests.key(), "len.request");
        assert_eq!(client.responses.key(), "len.response");
        assert_eq!(request_key("x"), "x.request");
        assert_eq!(response_key("x"), "x.response");

        client.requests.send("hello".to_string());
        let request = server.requests.try_recv().unwrap();
        server.responses.send(request.len());

        assert_eq!(client.responses.try_recv(), Some(5));
    }
}
