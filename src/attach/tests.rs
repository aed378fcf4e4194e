//! Tests for the attach table

#[cfg(test)]
mod tests {
    use crate::attach::named_queue::*;
    use crate::attach::table::*;
    use crate::error::RendezvousError;

    #[test]
    fn test_create_attach_detach_cycle() {
        let table = AttachTable::new();
        table.create::<i32>("jobs").unwrap();
        assert_eq!(table.attached_count("jobs"), Some(0));

        let mut producer = NamedQueue::<i32>::with_table(&table);
        let mut consumer = NamedQueue::<i32>::with_table(&table);
        producer.attach("jobs").unwrap();
        consumer.attach("jobs").unwrap();
        assert_eq!(table.attached_count("jobs"), Some(2));

        producer.push(1).unwrap();
        producer.push(2).unwrap();
        assert_eq!(consumer.size().unwrap(), 2);
        assert_eq!(consumer.front().unwrap(), 1);
        assert_eq!(consumer.back().unwrap(), 2);
        assert_eq!(consumer.pop().unwrap(), 1);
        assert_eq!(consumer.try_pop().unwrap(), Some(2));
        assert!(consumer.empty().unwrap());

        producer.detach().unwrap();
        assert_eq!(table.attached_count("jobs"), Some(1));
        consumer.detach().unwrap();
        assert!(!table.contains("jobs"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_attach_before_create_fails() {
        let table = AttachTable::new();
        let mut handle = NamedQueue::<u8>::with_table(&table);

        assert!(matches!(
            handle.attach("nowhere"),
            Err(RendezvousError::KeyNotFound { .. })
        ));
        assert!(!handle.is_attached());
    }

    #[test]
    fn test_detached_handle_rejects_operations() {
        let table = AttachTable::new();
        let mut handle = NamedQueue::<u8>::with_table(&table);

        assert!(matches!(handle.push(1), Err(RendezvousError::NotAttached { operation: "push" })));
        assert!(matches!(handle.pop(), Err(RendezvousError::NotAttached { operation: "pop" })));
        assert!(matches!(handle.front(), Err(RendezvousError::NotAttached { .. })));
        assert!(matches!(handle.back(), Err(RendezvousError::NotAttached { .. })));
        assert!(matches!(handle.size(), Err(RendezvousError::NotAttached { .. })));
        assert!(matches!(handle.empty(), Err(RendezvousError::NotAttached { .. })));
        assert!(matches!(handle.clear(), Err(RendezvousError::NotAttached { .. })));
        assert!(matches!(handle.detach(), Err(RendezvousError::NotAttached { operation: "detach" })));
    }

    #[test]
    fn test_recreate_keeps_count_and_data() {
        let table = AttachTable::new();
        table.create::<String>("log").unwrap();

        let mut writer = NamedQueue::<String>::with_table(&table);
        writer.attach("log").unwrap();
        writer.push("kept".to_string()).unwrap();

        table.create::<String>("log").unwrap();
        assert_eq!(table.attached_count("log"), Some(1));
        assert_eq!(writer.size().unwrap(), 1);
    }

    #[test]
    fn test_type_checked_create_and_attach() {
        let table = AttachTable::new();
        table.create::<u32>("typed").unwrap();

        assert!(matches!(
            table.create::<String>("typed"),
            Err(RendezvousError::TypeMismatch { .. })
        ));

        let mut handle = NamedQueue::<String>::with_table(&table);
        assert!(matches!(
            handle.attach("typed"),
            Err(RendezvousError::TypeMismatch { .. })
        ));
        assert_eq!(table.attached_count("typed"), Some(0));
    }

    #[test]
    fn test_double_attach_rejected() {
        let table = AttachTable::new();
        table.create::<u8>("one").unwrap();
        table.create::<u8>("two").unwrap();

        let mut handle = NamedQueue::<u8>::with_table(&table);
        handle.attach("one").unwrap();
        assert!(matches!(
            handle.attach("two"),
            Err(RendezvousError::AlreadyAttached { .. })
        ));
        assert_eq!(handle.key(), Some("one"));
        assert_eq!(table.attached_count("two"), Some(0));
    }

    #[test]
    fn test_drop_detaches() {
        let table = AttachTable::new();
        let creator = NamedQueue::<u8>::with_table(&table);
        creator.create("scoped").unwrap();

        {
            let mut handle = NamedQueue::<u8>::with_table(&table);
            handle.attach("scoped").unwrap();
            handle.push(9).unwrap();
            assert_eq!(table.attached_count("scoped"), Some(1));
        }

        assert!(!table.contains("scoped"));
    }

    #[test]
    fn test_clear() {
        let table = AttachTable::new();
        table.create::<u8>("bulk").unwrap();
        let mut handle = NamedQueue::<u8>::with_table(&table);
        handle.attach("bulk").unwrap();

        for i in 0..10 {
            handle.push(i).unwrap();
        }
        handle.clear().unwrap();
        assert!(handle.empty().unwrap());
    }
}
