//! Lifecycle points reported to the [`Logger`](crate::Logger).

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

/// Classification of log records emitted by hubs, topics and listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    // === Hub ===
    HubCloseBegin,
    HubCloseOk,

    // === Listener registration ===
    /// Listener subscribed; `listener` is set.
    ListenerSubOk,
    /// Duplicate listener name; `error` names the existing position.
    ListenerSubErr,
    ListenerUnsubOk,
    /// Unsubscribe of an unknown listener; `error` is `"not found"`.
    ListenerUnsubErr,

    // === Listener task ===
    /// Shutdown sentinel enqueued; `event` is the sentinel.
    ListenerCloseBegin,
    /// Listener task observed its sentinel and exited.
    ListenerCloseOk,

    // === Topic ===
    TopicRegisterBegin,
    TopicRegisterOk,
    /// Registration refused (duplicate name or closed hub); `error` says which.
    TopicRegisterErr,
    TopicCloseBegin,
    TopicCloseOk,

    // === Event flow ===
    EventPubBegin,
    EventPubOk,
    EventSendBegin,
    EventSendOk,
    /// The listener task is gone; the event was discarded for that listener.
    EventSendErr,
    EventHandleBegin,
    EventHandleOk,
    /// Callback panicked; `error` carries the panic message.
    EventHandleErr,
}

impl LogKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            LogKind::HubCloseBegin => "hub_close_begin",
            LogKind::HubCloseOk => "hub_close_ok",
            LogKind::ListenerSubOk => "listener_sub_ok",
            LogKind::ListenerSubErr => "listener_sub_err",
            LogKind::ListenerUnsubOk => "listener_unsub_ok",
            LogKind::ListenerUnsubErr => "listener_unsub_err",
            LogKind::ListenerCloseBegin => "listener_close_begin",
            LogKind::ListenerCloseOk => "listener_close_ok",
            LogKind::TopicRegisterBegin => "topic_register_begin",
            LogKind::TopicRegisterOk => "topic_register_ok",
            LogKind::TopicRegisterErr => "topic_register_err",
            LogKind::TopicCloseBegin => "topic_close_begin",
            LogKind::TopicCloseOk => "topic_close_ok",
            LogKind::EventPubBegin => "event_pub_begin",
            LogKind::EventPubOk => "event_pub_ok",
            LogKind::EventSendBegin => "event_send_begin",
            LogKind::EventSendOk => "event_send_ok",
            LogKind::EventSendErr => "event_send_err",
            LogKind::EventHandleBegin => "event_handle_begin",
            LogKind::EventHandleOk => "event_handle_ok",
            LogKind::EventHandleErr => "event_handle_err",
        }
    }

    /// Default severity of this kind.
    ///
    /// Per-event traffic is `Debug`, structural changes are `Info`,
    /// failures are `Error`.
    pub fn level(&self) -> LogLevel {
        match self {
            LogKind::ListenerSubErr
            | LogKind::ListenerUnsubErr
            | LogKind::TopicRegisterErr
            | LogKind::EventSendErr
            | LogKind::EventHandleErr => LogLevel::Error,

            LogKind::HubCloseBegin
            | LogKind::HubCloseOk
            | LogKind::ListenerSubOk
            | LogKind::ListenerUnsubOk
            | LogKind::ListenerCloseBegin
            | LogKind::ListenerCloseOk
            | LogKind::TopicRegisterBegin
            | LogKind::TopicRegisterOk => LogLevel::Info,

            LogKind::TopicCloseBegin
            | LogKind::TopicCloseOk
            | LogKind::EventPubBegin
            | LogKind::EventPubOk
            | LogKind::EventSendBegin
            | LogKind::EventSendOk
            | LogKind::EventHandleBegin
            | LogKind::EventHandleOk => LogLevel::Debug,
        }
    }
}
