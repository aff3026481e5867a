use crate::configuration::get_configuration;
use crate::services::seed;
use actix_web::rt;

pub struct SeedCommand {}

impl SeedCommand {
    pub fn new() -> Self {
        Self {}
    }

    async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = get_configuration()?;
        let db_pool = super::connect(&settings).await?;

        let admin = seed::ensure_admin(&db_pool, &settings.admin).await?;
        println!("Admin user '{}' is ready", admin.username);

        match seed::seed_if_empty(&db_pool).await? {
            0 => println!("Products already present, nothing seeded"),
            inserted => println!("Inserted {} sample products", inserted),
        }

        Ok(())
    }
}

impl crate::console::commands::CallableTrait for SeedCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        rt::System::new().block_on(self.run())
    }
}
