use canvas_core::{ColumnDef, ColumnType, RelationDef, SchemaDef, SimpleColumnType, TableDef};
use canvas_naming::build_table_name;

fn varchar(length: u32) -> ColumnType {
    ColumnType::varchar(length)
}

fn timestamp() -> ColumnType {
    ColumnType::Simple(SimpleColumnType::Timestamp)
}

/// Insertion time, filled in by the database.
fn created_at() -> ColumnDef {
    ColumnDef::new("created_at", timestamp())
        .not_null()
        .default_value("CURRENT_TIMESTAMP")
}

/// Set by the application on update.
fn updated_at() -> ColumnDef {
    ColumnDef::new("updatedAt", timestamp())
}

/// `canvas-ai_user`: accounts, keyed by `id` and addressed by `email`.
pub fn user_table() -> TableDef {
    TableDef {
        name: build_table_name("user"),
        columns: vec![
            ColumnDef::serial("id"),
            ColumnDef::new("name", varchar(256)).index("name_idx"),
            ColumnDef::new("email", varchar(256)).not_null().unique(),
            created_at(),
            updated_at(),
        ],
        constraints: vec![],
        indexes: vec![],
    }
}

/// `canvas-ai_art`: artworks owned by a user through `user_email`.
pub fn art_table() -> TableDef {
    TableDef {
        name: build_table_name("art"),
        columns: vec![
            ColumnDef::serial("id"),
            ColumnDef::new("user_email", varchar(256))
                .not_null()
                .references(build_table_name("user"), "email"),
            ColumnDef::new("title", varchar(256))
                .not_null()
                .index("title_idx"),
            ColumnDef::new("description", varchar(256)),
            ColumnDef::new("url", varchar(1024)).not_null(),
            ColumnDef::new("estimated_price", ColumnType::Simple(SimpleColumnType::Real)),
            ColumnDef::new("real_price", ColumnType::Simple(SimpleColumnType::Real)),
            ColumnDef::new("self_art", ColumnType::Simple(SimpleColumnType::Boolean))
                .comment("artwork is self-created; used when estimating price"),
            ColumnDef::new("on_sale", ColumnType::Simple(SimpleColumnType::Boolean))
                .comment("artwork is listed for sale"),
            created_at(),
            updated_at(),
        ],
        constraints: vec![],
        indexes: vec![],
    }
}

pub fn user_relations() -> Vec<RelationDef> {
    vec![RelationDef::has_many(
        "arts",
        (&build_table_name("user"), "email"),
        (&build_table_name("art"), "user_email"),
    )]
}

pub fn art_relations() -> Vec<RelationDef> {
    vec![RelationDef::belongs_to(
        "artist",
        (&build_table_name("art"), "user_email"),
        (&build_table_name("user"), "email"),
    )]
}

pub fn schema() -> SchemaDef {
    SchemaDef {
        tables: vec![user_table(), art_table()],
        relations: user_relations().into_iter().chain(art_relations()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_core::TableConstraint;
    use canvas_planner::{PlannerError, plan_initial_migration, validate_schema};
    use rstest::rstest;

    #[test]
    fn declaration_validates() {
        validate_schema(&schema()).unwrap();
    }

    #[rstest]
    #[case::user(user_table(), "canvas-ai_user")]
    #[case::art(art_table(), "canvas-ai_art")]
    fn tables_carry_prefix(#[case] table: TableDef, #[case] expected: &str) {
        assert_eq!(table.name, expected);
        assert_eq!(table.primary_key_columns(), vec!["id".to_string()]);
    }

    #[test]
    fn user_columns() {
        let user = user_table().normalize();
        let names: Vec<&str> = user.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "email", "created_at", "updatedAt"]);

        let email = user.column("email").unwrap();
        assert!(!email.nullable);
        assert_eq!(email.r#type, ColumnType::varchar(256));
        assert!(user.constraints.iter().any(|c| matches!(
            c,
            TableConstraint::Unique { name: Some(n), columns }
                if n == "uq_canvas-ai_user__email" && columns == &["email".to_string()]
        )));

        assert_eq!(user.indexes.len(), 1);
        assert_eq!(user.indexes[0].name, "name_idx");
        assert!(user.column("name").unwrap().nullable);
        assert_eq!(
            user.column("created_at").unwrap().default.as_deref(),
            Some("CURRENT_TIMESTAMP")
        );
        assert!(user.column("updatedAt").unwrap().nullable);
    }

    #[test]
    fn art_columns() {
        let art = art_table().normalize();
        let names: Vec<&str> = art.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "user_email",
                "title",
                "description",
                "url",
                "estimated_price",
                "real_price",
                "self_art",
                "on_sale",
                "created_at",
                "updatedAt",
            ]
        );
        assert_eq!(art.column("url").unwrap().r#type, ColumnType::varchar(1024));
        assert!(!art.column("url").unwrap().nullable);
        assert!(!art.column("title").unwrap().nullable);
        assert!(art.column("description").unwrap().nullable);
        assert_eq!(art.indexes[0].name, "title_idx");

        assert!(art.constraints.iter().any(|c| matches!(
            c,
            TableConstraint::ForeignKey { columns, ref_table, ref_columns, on_delete: None, on_update: None, .. }
                if columns == &["user_email".to_string()]
                    && ref_table == "canvas-ai_user"
                    && ref_columns == &["email".to_string()]
        )));
    }

    #[test]
    fn relations_are_inverse() {
        let arts = &user_relations()[0];
        let artist = &art_relations()[0];
        assert_eq!(arts.name, "arts");
        assert_eq!(artist.name, "artist");
        assert!(arts.is_inverse_of(artist));
    }

    #[test]
    fn user_is_created_before_art() {
        let plan = plan_initial_migration(&schema()).unwrap();
        let tables: Vec<&str> = plan.actions.iter().map(|a| a.table()).collect();
        assert_eq!(
            tables,
            vec!["canvas-ai_user", "canvas-ai_art", "canvas-ai_user", "canvas-ai_art"]
        );
    }

    #[test]
    fn second_primary_key_on_email_is_rejected() {
        let mut user = user_table();
        user.columns[2] = user.columns[2].clone().primary_key();
        let schema = SchemaDef {
            tables: vec![user, art_table()],
            relations: vec![],
        };
        assert!(matches!(
            validate_schema(&schema),
            Err(PlannerError::MultiplePrimaryKeys(_, _))
        ));
    }

    #[test]
    fn integer_user_email_is_rejected() {
        let mut art = art_table();
        art.columns[1].r#type = ColumnType::Simple(SimpleColumnType::Integer);
        let schema = SchemaDef {
            tables: vec![user_table(), art],
            relations: vec![],
        };
        assert!(matches!(
            validate_schema(&schema),
            Err(PlannerError::ForeignKeyTypeMismatch(_))
        ));
    }

    #[test]
    fn relation_keyed_on_id_is_rejected() {
        let mut schema = schema();
        schema.relations = vec![
            RelationDef::has_many("arts", ("canvas-ai_user", "id"), ("canvas-ai_art", "user_email")),
            RelationDef::belongs_to("artist", ("canvas-ai_art", "user_email"), ("canvas-ai_user", "id")),
        ];
        assert!(matches!(
            validate_schema(&schema),
            Err(PlannerError::RelationMismatch(_, _))
        ));
    }
}
