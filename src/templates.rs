use maud::{html, Markup, DOCTYPE};

/// Landing page listing the endpoints the service exposes.
pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Property Simple" }
            }
            body {
                h1 { "Property Simple" }
                p { "A small property store with a Zillow lookup bolted on." }

                h2 { "Endpoints" }
                ul {
                    li { code { "POST /property" } " – store a property" }
                    li { code { "GET /property" } " – list stored properties" }
                    li { code { "GET /property/:id" } " – fetch one property" }
                    li { code { "DELETE /property/:id" } " – delete one property" }
                    li { code { "DELETE /property" } " – delete everything" }
                    li { code { "GET /zillow/search" } " – deep search by address" }
                    li { code { "GET /zillow/property/:zpid" } " – updated property details" }
                    li { code { "GET /zillow/demographics" } " – neighborhood demographics" }
                    li { code { "GET /zillow/api/:name" } " – any listed Zillow operation" }
                }
            }
        }
    }
}
