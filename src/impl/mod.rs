// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod sales_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod transaction_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod dataset_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod config;
        pub(crate) mod dataset;
        pub(crate) mod menu_item;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod calendar_driver;
        pub(crate) mod categorical;
        pub(crate) mod synthesizer;
    }
    pub(crate) mod repositories {
        pub(crate) mod dataset_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod generate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod summary_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::dataset::*;
        pub use crate::domain::entities::menu_item::*;
        pub use crate::domain::entities::transaction::*;
    }
}
