use crate::configuration::get_configuration;
use crate::services::seed;
use actix_web::rt;

pub struct ResetCommand {}

impl ResetCommand {
    pub fn new() -> Self {
        Self {}
    }

    async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = get_configuration()?;
        let db_pool = super::connect(&settings).await?;

        let inserted = seed::reset_products(&db_pool).await?;
        println!("Catalogue reset, {} sample products loaded", inserted);

        Ok(())
    }
}

impl crate::console::commands::CallableTrait for ResetCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        rt::System::new().block_on(self.run())
    }
}
