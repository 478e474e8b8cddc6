use entity::{comment, post, user};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::error::AppError;
use crate::forms::PostData;

/// Explicit repository functions over the entities. Relationships are walked
/// with named join queries here, never through lazy object graphs.

pub async fn find_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn find_user_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<user::Model>, AppError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

pub async fn insert_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<user::Model, AppError> {
    let new_user = user::ActiveModel {
        name: Set(name.to_owned()),
        email: Set(email.to_owned()),
        password: Set(password_hash.to_owned()),
        ..Default::default()
    };
    new_user.insert(db).await.map_err(AppError::from_write_err)
}

pub async fn all_posts_with_authors(
    db: &DatabaseConnection,
) -> Result<Vec<(post::Model, Option<user::Model>)>, AppError> {
    Ok(post::Entity::find()
        .find_also_related(user::Entity)
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?)
}

pub async fn find_post(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<post::Model>, AppError> {
    Ok(post::Entity::find_by_id(id).one(db).await?)
}

pub async fn posts_by_author(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<Vec<post::Model>, AppError> {
    Ok(post::Entity::find()
        .filter(post::Column::AuthorId.eq(author_id))
        .order_by_asc(post::Column::Id)
        .all(db)
        .await?)
}

pub async fn insert_post(
    db: &DatabaseConnection,
    data: &PostData,
    date: &str,
    author_id: i32,
) -> Result<post::Model, AppError> {
    let new_post = post::ActiveModel {
        title: Set(data.title.clone()),
        subtitle: Set(data.subtitle.clone()),
        date: Set(date.to_owned()),
        body: Set(data.body.clone()),
        img_url: Set(data.img_url.clone()),
        author_id: Set(author_id),
        ..Default::default()
    };
    new_post.insert(db).await.map_err(AppError::from_write_err)
}

pub async fn update_post(
    db: &DatabaseConnection,
    existing: post::Model,
    data: &PostData,
    author_id: i32,
) -> Result<post::Model, AppError> {
    let mut active: post::ActiveModel = existing.into();
    active.title = Set(data.title.clone());
    active.subtitle = Set(data.subtitle.clone());
    active.body = Set(data.body.clone());
    active.img_url = Set(data.img_url.clone());
    active.author_id = Set(author_id);
    active.update(db).await.map_err(AppError::from_write_err)
}

pub async fn delete_post(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    post::Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}

pub async fn comments_for_post(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<Vec<(comment::Model, Option<user::Model>)>, AppError> {
    Ok(comment::Entity::find()
        .filter(comment::Column::PostId.eq(post_id))
        .find_also_related(user::Entity)
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await?)
}

pub async fn insert_comment(
    db: &DatabaseConnection,
    text: &str,
    author_id: i32,
    post_id: i32,
) -> Result<comment::Model, AppError> {
    let new_comment = comment::ActiveModel {
        text: Set(text.to_owned()),
        author_id: Set(author_id),
        post_id: Set(post_id),
        ..Default::default()
    };
    new_comment
        .insert(db)
        .await
        .map_err(AppError::from_write_err)
}
