use crate::{
    application::{
        get_society::use_case::GetSocietyUseCase, parse_address::use_case::ParseAddressUseCase,
        parse_batch::use_case::ParseBatchUseCase,
    },
    config::Config,
    domain::{resolution::AddressResolver, society::SocietyRegistry},
    infrastructure::security::ValidationService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AddressResolver>,
    pub validation: Arc<ValidationService>,
    pub config: Config,
}

impl AppState {
    pub fn new(registry: SocietyRegistry, config: Config) -> Self {
        Self {
            resolver: Arc::new(AddressResolver::with_settings(
                registry,
                config.resolver_settings(),
            )),
            validation: Arc::new(ValidationService::new()),
            config,
        }
    }

    pub fn registry(&self) -> &SocietyRegistry {
        self.resolver.registry()
    }

    pub fn get_society(&self) -> GetSocietyUseCase {
        GetSocietyUseCase::new(self.registry().clone())
    }

    pub fn parse_address(&self) -> ParseAddressUseCase {
        ParseAddressUseCase::new(self.resolver.clone(), self.validation.clone())
    }

    pub fn parse_batch(&self) -> ParseBatchUseCase {
        ParseBatchUseCase::new(
            self.resolver.clone(),
            self.validation.clone(),
            self.config.batch_max_records,
        )
    }
}
