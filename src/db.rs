#[cfg(feature = "ssr")]
mod db_impl {
    use crate::loader::Dataset;
    use crate::models::listing::ListingView;
    use crate::models::map_view::MapView;
    use crate::models::query::{CategoryVar, FilterOptions, MapQuery, QuantityVar};
    use crate::pipeline::ListingFilter;
    use chrono::NaiveDate;
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::types::Value;
    use rusqlite::{params, params_from_iter, Connection, Error};
    use std::sync::Arc;
    use tokio::sync::Mutex;


    // In-memory listing store, loaded once at startup and only read afterwards
    #[derive(Debug)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        pub fn new(db_path: &str) -> Result<Self, Error> {
            let conn = Connection::open(db_path)?;
            logging::log!("Listing store opened at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS neighbourhoods (
                    row_order INTEGER PRIMARY KEY,
                    neighbourhood TEXT NOT NULL,
                    neighbourhood_group TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_neighbourhoods_name ON neighbourhoods(neighbourhood);",
            )
            .map_err(|e| {
                logging::error!("Failed creating neighbourhoods table: {}", e);
                e
            })?;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    listing_id INTEGER NOT NULL,
                    date TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_reviews_listing ON reviews(listing_id);
                CREATE INDEX IF NOT EXISTS idx_reviews_date ON reviews(date);",
            )
            .map_err(|e| {
                logging::error!("Failed creating reviews table: {}", e);
                e
            })?;

            // neighbourhood_group and last_review_update are derived after load
            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS listings (
                    row_order INTEGER PRIMARY KEY,
                    id INTEGER NOT NULL,
                    name TEXT NOT NULL,
                    host_id INTEGER NOT NULL,
                    host_name TEXT NOT NULL,
                    neighbourhood TEXT NOT NULL,
                    latitude REAL NOT NULL,
                    longitude REAL NOT NULL,
                    room_type TEXT NOT NULL,
                    price REAL NOT NULL,
                    minimum_nights INTEGER NOT NULL,
                    availability_365 INTEGER NOT NULL,
                    neighbourhood_group TEXT,
                    last_review_update TEXT
                );
                CREATE INDEX IF NOT EXISTS idx_listings_id ON listings(id);",
            )
            .map_err(|e| {
                logging::error!("Failed creating listings table: {}", e);
                e
            })?;

            Ok(())
        }

        /// Inserts the source tables and derives each listing's neighbourhood
        /// group and latest review date.
        pub async fn load_dataset(&self, dataset: &Dataset) -> Result<(), Error> {
            log!("[DB] Loading dataset");
            let mut conn = self.conn.lock().await;
            let tx = conn.transaction()?;

            {
                let mut stmt = tx.prepare(
                    "INSERT INTO neighbourhoods (row_order, neighbourhood, neighbourhood_group)
                     VALUES (?, ?, ?)",
                )?;
                for (order, hood) in dataset.neighbourhoods.iter().enumerate() {
                    stmt.execute(params![
                        order as i64,
                        &hood.neighbourhood,
                        &hood.neighbourhood_group
                    ])?;
                }

                let mut stmt =
                    tx.prepare("INSERT INTO reviews (listing_id, date) VALUES (?, ?)")?;
                for review in &dataset.reviews {
                    stmt.execute(params![review.listing_id, review.date])?;
                }

                let mut stmt = tx.prepare(
                    "INSERT INTO listings (row_order, id, name, host_id, host_name, neighbourhood,
                        latitude, longitude, room_type, price, minimum_nights, availability_365)
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                )?;
                for (order, listing) in dataset.listings.iter().enumerate() {
                    stmt.execute(params![
                        order as i64,
                        listing.id,
                        &listing.name,
                        listing.host_id,
                        &listing.host_name,
                        &listing.neighbourhood,
                        listing.latitude,
                        listing.longitude,
                        &listing.room_type,
                        listing.price,
                        listing.minimum_nights,
                        listing.availability_365,
                    ])?;
                }
            }

            log!("[DB] Deriving neighbourhood_group and last_review_update");
            tx.execute_batch(
                "UPDATE listings SET
                    neighbourhood_group = (
                        SELECT n.neighbourhood_group FROM neighbourhoods n
                        WHERE n.neighbourhood = listings.neighbourhood
                        ORDER BY n.row_order LIMIT 1
                    ),
                    last_review_update = (
                        SELECT MAX(r.date) FROM reviews r WHERE r.listing_id = listings.id
                    );",
            )?;

            tx.commit()?;
            log!("[DB] Dataset committed successfully");
            Ok(())
        }

        pub async fn filter_options(&self) -> Result<FilterOptions, Error> {
            let conn = self.conn.lock().await;

            let room_types = conn
                .prepare(
                    "SELECT room_type FROM listings GROUP BY room_type ORDER BY MIN(row_order)",
                )?
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;

            let neighbourhood_groups = conn
                .prepare(
                    "SELECT neighbourhood_group FROM neighbourhoods
                     GROUP BY neighbourhood_group ORDER BY MIN(row_order)",
                )?
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;

            let max_minimum_nights: i64 = conn.query_row(
                "SELECT COALESCE(MAX(minimum_nights), 1) FROM listings",
                [],
                |row| row.get(0),
            )?;

            let (first_review, last_review) = conn.query_row(
                "SELECT MIN(date), MAX(date) FROM reviews",
                [],
                |row| {
                    Ok((
                        row.get::<_, Option<NaiveDate>>(0)?,
                        row.get::<_, Option<NaiveDate>>(1)?,
                    ))
                },
            )?;

            Ok(FilterOptions {
                room_types,
                neighbourhood_groups,
                max_minimum_nights,
                first_review,
                last_review,
            })
        }

        /// Neighbourhood names in file order, narrowed to `groups` when any
        /// group is selected.
        pub async fn neighbourhood_options(&self, groups: &[String]) -> Result<Vec<String>, Error> {
            let conn = self.conn.lock().await;
            if groups.is_empty() {
                let mut stmt =
                    conn.prepare("SELECT neighbourhood FROM neighbourhoods ORDER BY row_order")?;
                let names = stmt.query_map([], |row| row.get(0))?;
                return names.collect();
            }

            let placeholders = vec!["?"; groups.len()].join(", ");
            let mut stmt = conn.prepare(&format!(
                "SELECT neighbourhood FROM neighbourhoods
                 WHERE neighbourhood_group IN ({}) ORDER BY row_order",
                placeholders
            ))?;
            let names = stmt.query_map(params_from_iter(groups.iter()), |row| row.get(0))?;
            names.collect()
        }

        /// Listings per value of `var`, fewest first. Absent values are not
        /// counted.
        pub async fn category_counts(&self, var: CategoryVar) -> Result<Vec<(String, i64)>, Error> {
            let conn = self.conn.lock().await;
            let column = var.column();
            let mut stmt = conn.prepare(&format!(
                "SELECT {col}, COUNT(id) AS n FROM listings WHERE {col} IS NOT NULL
                 GROUP BY {col} ORDER BY n ASC, MIN(row_order) ASC",
                col = column
            ))?;
            let counts = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            counts.collect()
        }

        pub async fn quantity_values(&self, var: QuantityVar) -> Result<Vec<f64>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&format!(
                "SELECT CAST({} AS REAL) FROM listings ORDER BY row_order",
                var.column()
            ))?;
            let values = stmt.query_map([], |row| row.get(0))?;
            values.collect()
        }

        /// Number of reviews written on each day, oldest first.
        pub async fn reviews_per_date(&self) -> Result<Vec<(NaiveDate, i64)>, Error> {
            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT date, COUNT(listing_id) FROM reviews GROUP BY date ORDER BY date",
            )?;
            let series = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            series.collect()
        }

        /// Runs the map filters and returns the surviving listings in file
        /// order, annotated with their review counts.
        pub async fn filter_listings(&self, query: &MapQuery) -> Result<Vec<ListingView>, Error> {
            let filter = ListingFilter::from_query(query);
            let sql = filter.sql();
            let params: Vec<Value> = filter.params();

            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
                Ok(ListingView {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    host_id: row.get(2)?,
                    host_name: row.get(3)?,
                    neighbourhood: row.get(4)?,
                    latitude: row.get(5)?,
                    longitude: row.get(6)?,
                    room_type: row.get(7)?,
                    price: row.get(8)?,
                    minimum_nights: row.get(9)?,
                    availability_365: row.get(10)?,
                    neighbourhood_group: row.get(11)?,
                    last_review_update: row.get(12)?,
                    num_review: row.get(13)?,
                })
            })?;

            let mut listings = Vec::new();
            for row in rows {
                listings.push(row?);
            }
            Ok(listings)
        }

        pub async fn map_view(&self, query: &MapQuery) -> Result<MapView, Error> {
            let listings = self.filter_listings(query).await?;
            log!("[DB] Map query matched {} listings", listings.len());
            Ok(MapView::build(query.color, &listings))
        }

        // function to log table sizes after startup
        pub async fn debug_dump(&self) -> Result<(), Error> {
            let conn = self.conn.lock().await;
            for table in ["listings", "reviews", "neighbourhoods"] {
                let count: i64 =
                    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                        row.get(0)
                    })?;
                log!("[DATABASE DEBUG] {}: {} rows", table, count);
            }
            let unreviewed: i64 = conn.query_row(
                "SELECT COUNT(*) FROM listings WHERE last_review_update IS NULL",
                [],
                |row| row.get(0),
            )?;
            log!("[DATABASE DEBUG] listings without reviews: {}", unreviewed);
            Ok(())
        }
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
