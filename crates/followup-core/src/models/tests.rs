#[cfg(test)]
mod model_tests {
    use jiff::{Timestamp, civil::date, tz::TimeZone};

    use crate::models::{
        ChannelCounts, ExecuteResponse, ScheduleDay, Task, TaskType, TodoItem, Touchpoint,
    };

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn create_test_day() -> ScheduleDay {
        ScheduleDay {
            day: 2,
            date: date(2024, 3, 5),
            tasks: vec![
                Task {
                    kind: TaskType::Email,
                    scheduled_for: ts("2024-03-05T08:05:00Z"),
                    notes: "Send recap".to_string(),
                },
                Task {
                    kind: TaskType::Call,
                    scheduled_for: ts("2024-03-05T11:00:00Z"),
                    notes: String::new(),
                },
                Task {
                    kind: TaskType::Email,
                    scheduled_for: ts("2024-03-05T16:45:00Z"),
                    notes: "Share pricing".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_task_type_parsing_aliases() {
        assert_eq!("emails".parse::<TaskType>().unwrap(), TaskType::Email);
        assert_eq!("Phone".parse::<TaskType>().unwrap(), TaskType::Call);
        assert_eq!("whatsapp".parse::<TaskType>().unwrap(), TaskType::WhatsappMessage);
        assert_eq!(
            "whatsapp_message".parse::<TaskType>().unwrap(),
            TaskType::WhatsappMessage
        );
        assert!("fax".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_unknown_channel_defaults_to_email() {
        assert_eq!(TaskType::from_channel(None), TaskType::Email);
        assert_eq!(TaskType::from_channel(Some("sms")), TaskType::Email);
        assert_eq!(TaskType::from_channel(Some("call")), TaskType::Call);
    }

    #[test]
    fn test_day_counts_and_channel_views() {
        let day = create_test_day();
        assert_eq!(
            day.counts(),
            ChannelCounts {
                emails: 2,
                calls: 1,
                whatsapp: 0
            }
        );
        assert_eq!(day.counts().total(), 3);
        assert_eq!(day.counts().get(TaskType::Email), 2);
        assert_eq!(day.times(TaskType::Email, &TimeZone::UTC), vec!["08:05", "16:45"]);
        assert_eq!(day.notes(TaskType::Email), vec!["Send recap", "Share pricing"]);
        assert!(day.times(TaskType::WhatsappMessage, &TimeZone::UTC).is_empty());
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task {
            kind: TaskType::WhatsappMessage,
            scheduled_for: ts("2024-03-05T09:00:00Z"),
            notes: "Ping".to_string(),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "whatsapp_message");
        assert_eq!(json["scheduledFor"], "2024-03-05T09:00:00Z");
        assert_eq!(json["notes"], "Ping");
    }

    #[test]
    fn test_todo_item_wire_format() {
        let item = TodoItem {
            kind: TaskType::Call,
            person_id: "lead-7".to_string(),
            day: 3,
            scheduled_for: ts("2024-03-07T14:00:00Z"),
            notes: String::new(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["personId"], "lead-7");
        assert_eq!(json["day"], 3);
        assert_eq!(json["type"], "call");
    }

    #[test]
    fn test_execute_response_parses_plan_id() {
        let response: ExecuteResponse = serde_json::from_str(r#"{"planId":"p-1"}"#).unwrap();
        assert_eq!(response, ExecuteResponse::with_plan_id("p-1"));

        let empty: ExecuteResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.plan_id, None);
    }

    #[test]
    fn test_touchpoint_fields_are_optional() {
        let tp: Touchpoint = serde_json::from_str(r#"{"channel":"call"}"#).unwrap();
        assert_eq!(tp.offset_hours, None);
        assert_eq!(tp.task_type(), TaskType::Call);
        assert_eq!(tp.message, None);
    }
}
