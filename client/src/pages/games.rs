//! Games catalog with a popular strip and a category filter.

#[cfg(test)]
#[path = "games_test.rs"]
mod games_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::catalog::{Game, GameCategory, games_in, popular_games};

fn game_href(game: &Game) -> String {
    format!("/games/{}", game.id)
}

fn rating_label(rating: f32) -> String {
    format!("{rating:.1}")
}

fn game_card(game: &'static Game, action: &'static str) -> impl IntoView {
    view! {
        <article class="game-card">
            <img class="game-card__image" src=game.image_url alt=game.title/>
            <div class="game-card__body">
                <div class="game-card__title-row">
                    <h3>{game.title}</h3>
                    <span class="game-card__rating">{format!("★ {}", rating_label(game.rating))}</span>
                </div>
                <p>{game.description}</p>
                <div class="game-card__meta">
                    <span class=format!("badge badge--{}", game.category.slug())>{game.difficulty.label()}</span>
                    <span>{game.time}</span>
                    <A href=game_href(game) attr:class="game-card__play">{action}</A>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn GamesPage() -> impl IntoView {
    let filter = RwSignal::new(None::<GameCategory>);

    let category_button = move |category: Option<GameCategory>| {
        let label = category.map_or("All Categories", GameCategory::label);
        view! {
            <button
                type="button"
                class="filter-chip"
                class:filter-chip--active=move || filter.get() == category
                on:click=move |_| filter.set(category)
            >
                {label}
            </button>
        }
    };

    view! {
        <main class="page games-page">
            <header class="page__header">
                <h1>"Educational Games"</h1>
                <p>"Interactive games and activities designed for development and fun"</p>
            </header>
            <section class="page__section">
                <h2>"Popular Activities"</h2>
                <div class="card-grid card-grid--three">
                    {popular_games().into_iter().map(|game| game_card(game, "Play Now")).collect_view()}
                </div>
            </section>
            <section class="page__section">
                <h2>"Browse by Category"</h2>
                <div class="filter-chips">
                    {category_button(None)}
                    {GameCategory::ALL.into_iter().map(|c| category_button(Some(c))).collect_view()}
                </div>
            </section>
            <section class="page__section">
                <div class="card-grid card-grid--four">
                    {move || games_in(filter.get()).into_iter().map(|game| game_card(game, "Play")).collect_view()}
                </div>
            </section>
        </main>
    }
}
