pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod listeners;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod course;
            pub mod employee;
            pub mod events;
            pub mod factory;
            pub mod policy;
            pub mod ports;
        }
        pub mod application {
            pub mod employee_service;
            pub mod errors;
            pub mod promotion_service;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod employee_repository_in_memory;
                pub mod promotion_eligibility_http;
            }
        }
    }
}

pub mod shell;
