use crate::{Field, FieldKind, Template};

pub(crate) fn templates() -> Vec<Template> {
    vec![silly_story(), space_trip(), dinner_party(), pet_show()]
}

fn silly_story() -> Template {
    Template {
        key: "silly-story".into(),
        title: "A Very Silly Story".into(),
        category: "classic".into(),
        fields: vec![
            Field::new("name", "A person's name", FieldKind::Name),
            Field::new("adjective", "An adjective", FieldKind::Adjective),
            Field::new("food", "A food", FieldKind::Noun),
            Field::new("place", "A place", FieldKind::Place),
            Field::new("number", "A number", FieldKind::Number),
            Field::new("exclamation", "An exclamation", FieldKind::Exclamation),
        ],
        text: "Once upon a time, {name} found a {adjective} {food} in {place}. \
               It was so big that {number} friends had to help carry it home. \
               \"{exclamation}!\" said {name}, and everyone laughed until dinner."
            .into(),
    }
}

fn space_trip() -> Template {
    Template {
        key: "space-trip".into(),
        title: "Trip to Outer Space".into(),
        category: "adventure".into(),
        fields: vec![
            Field::new("planet", "A made-up planet", FieldKind::Place),
            Field::new("vehicle", "A vehicle", FieldKind::Noun),
            Field::new("aliens", "A plural noun", FieldKind::PluralNoun),
            Field::new("verb", "A verb", FieldKind::Verb),
            Field::new("adverb", "An adverb", FieldKind::Adverb),
            Field::new("days", "A number", FieldKind::Number),
        ],
        text: "We climbed into our {vehicle} and blasted off toward {planet}. \
               After {days} days we landed, and a crowd of {aliens} came out to {verb} \
               {adverb} around our ship. We never wanted to go home."
            .into(),
    }
}

fn dinner_party() -> Template {
    Template {
        key: "dinner-party".into(),
        title: "The Fanciest Dinner Party".into(),
        category: "food".into(),
        fields: vec![
            Field::new("host", "A celebrity", FieldKind::Name),
            Field::new("dessert", "A dessert", FieldKind::Noun),
            Field::new("drink", "Something to drink", FieldKind::Noun),
            Field::new("adjective", "An adjective", FieldKind::Adjective),
            Field::new("guests", "A number", FieldKind::Number),
        ],
        text: "{host} invited {guests} guests to the most {adjective} dinner party ever. \
               The river of {drink} flowed past a mountain of {dessert}, \
               and nobody remembered to eat their vegetables."
            .into(),
    }
}

fn pet_show() -> Template {
    Template {
        key: "pet-show".into(),
        title: "Best in Show".into(),
        category: "animals".into(),
        fields: vec![
            Field::new("pet", "An animal", FieldKind::Noun),
            Field::new("pet_name", "A silly name", FieldKind::Name),
            Field::new("trick", "A verb ending in -ing", FieldKind::Verb),
            Field::new("color", "A color", FieldKind::Adjective),
        ],
        text: "At the pet show, a {color} {pet} named {pet_name} won first prize \
               for {trick} on its hind legs. The judges gave {pet_name} a golden bone."
            .into(),
    }
}
