#![allow(dead_code)]

use rusqlite::Connection;

/// In-memory MovieLens database with a handful of movies.
///
/// | id | title       | ratings  | tagline | genres                         |
/// |----|-------------|----------|---------|--------------------------------|
/// | 1  | Toy Story   | 8, 9, 10 | yes     | Family, Animation, Comedy (x2) |
/// | 2  | Jumanji     | 6, 7     | no      | Family                         |
/// | 3  | Heat        | 9, 9     | no      | Action, Crime                  |
/// | 4  | Toy Story 2 | 7        | no      | Animation                      |
/// | 5  | Quiet Film  | none     | no      | none                           |
pub fn setup_db() -> Connection {
    let conn = movielens_db::open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Movies (Movie_ID, Title, Release_Date, Runtime, Original_Language, Budget, Revenue) VALUES
             (1, 'Toy Story', '1995-10-30', 81, 'en', 30000000, 373554033),
             (2, 'Jumanji', '1995-12-15', 104, 'en', 65000000, 262797249),
             (3, 'Heat', '1995-12-15', 170, 'en', 60000000, 187436818),
             (4, 'Toy Story 2', '1999-10-30', 92, 'en', 90000000, 497366869),
             (5, 'Quiet Film', NULL, NULL, NULL, NULL, NULL);

         INSERT INTO Ratings (Movie_ID, Rating) VALUES
             (1, 8), (1, 9), (1, 10),
             (2, 6), (2, 7),
             (3, 9), (3, 9),
             (4, 7);

         INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES
             (1, 'The adventure takes off!');

         INSERT INTO Genres (Genre_ID, Genre_Name) VALUES
             (1, 'Animation'), (2, 'Comedy'), (3, 'Family'),
             (4, 'Action'), (5, 'Crime'), (6, 'Comedy');

         INSERT INTO Movie_Genres (Movie_ID, Genre_ID) VALUES
             (1, 3), (1, 1), (1, 2), (1, 2), (1, 6),
             (2, 3),
             (3, 5), (3, 4),
             (4, 1);

         INSERT INTO Companies (Company_ID, Company_Name) VALUES
             (1, 'Pixar Animation Studios'), (2, 'Walt Disney Pictures'), (3, 'Warner Bros.');

         INSERT INTO Movie_Production_Companies (Movie_ID, Company_ID) VALUES
             (1, 2), (1, 1), (1, 1),
             (3, 3),
             (4, 1);",
    )
    .unwrap();
    conn
}

pub fn tagline_rows(conn: &Connection, movie_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM Movie_Taglines WHERE Movie_ID = ?1",
        [movie_id],
        |r| r.get(0),
    )
    .unwrap()
}
