pub mod shared {
    pub mod core {
        pub mod outcome;
    }
    pub mod infrastructure {
        pub mod repository;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
        }
        pub mod application {
            pub mod event_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod mappers {
                pub mod event_entity_to_event;
                pub mod event_registration_to_event_entity;
            }
            pub mod outbound {
                pub mod event_repository;
            }
        }
    }
    pub mod tickets {
        pub mod core {
            pub mod ticket;
        }
        pub mod application {
            pub mod ticket_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod mappers {
                pub mod ticket_entity_to_ticket;
                pub mod ticket_registration_to_ticket_entity;
            }
            pub mod outbound {
                pub mod ticket_repository;
            }
        }
    }
}

pub mod shell;
