/// The main quiz. A score is the number of statements checked.
pub static QUESTIONS: [&str; 100] = [
    "Skipped class to explore Kingston’s nightlife?",
    "Partied till dawn in a Queen’s dorm?",
    "Stolen a kiss under the historic arches on campus?",
    "Taken part in a wild Frosh Week escapade?",
    "Dared to go skinny dipping in a nearby lake?",
    "Hooked up in a Queen’s study lounge?",
    "Pulled an all-nighter at the Lister Library?",
    "Been caught sneaking into a late-night campus party?",
    "Flirted with someone from a different faculty?",
    "Joined a secret society (or rumor thereof) on campus?",
    "Partied with the Engineering crew until dawn?",
    "Been seduced by an Arts and Science classmate?",
    "Shared a scandalous kiss with a Smith School of Business student?",
    "Taken a risky dare from a Health Sciences major?",
    "Had a forbidden fling with a Law student?",
    "Dated someone from the Education faculty just for the thrill?",
    "Gotten lost on campus chasing a late-night thrill?",
    "Been part of a campus scandal that left you speechless?",
    "Pulled a prank during a Queen’s Homecoming?",
    "Had a secret romance that defied campus rules?",
    "Experimented with your sexuality during Frosh Week?",
    "Partied so hard you forgot you were a Queen’s Lancer?",
    "Had a rendezvous in one of Queen’s old, secretive halls?",
    "Played hook-up games in the Queen’s quad?",
    "Been busted by a professor for breaking curfew?",
    "Experienced unrestrained passion in a Queen’s dorm room?",
    "Embarked on a scandalous late-night rendezvous?",
    "Shared an intimate secret during a campus blackout?",
    "Shamelessly flirted at a Queen’s party?",
    "Sent a risqué text in the middle of a lecture?",
    "Snuck into a club on campus in outrageous attire?",
    "Accepted a naughty dare from your housemates?",
    "Been dared to do something wild at a Queen’s bash?",
    "Had a spontaneous, dirty encounter on campus grounds?",
    "Had a secret tryst in the back of a campus bar?",
    "Confessed a scandalous secret after one too many drinks?",
    "Joined a racy campus scavenger hunt?",
    "Taken part in a forbidden hookup tradition at Queen’s?",
    "Had a passionate night that left you red-faced on campus?",
    "Broken a rule just to score a quick romance?",
    "Flirted while waiting in a Queen’s dining hall line?",
    "Gotten wild during a Queen’s football game night?",
    "Been swept up in an impromptu campus make-out session?",
    "Shared a steamy secret with your lab partner?",
    "Sparked a romance in the arts building?",
    "Played truth or dare that went way over the top at Queen’s?",
    "Had a compromising moment in the student union?",
    "Been caught in a scandalous study group encounter?",
    "Had a wild escapade in the heart of Kingston?",
    "Partied with the Smith School of Business crew in a memorable way?",
    "Flirted with someone from Engineering after class?",
    "Found yourself in a messy campus love triangle?",
    "Added a risqué twist to a Queen’s seminar break?",
    "Stolen a kiss during a campus tradition event?",
    "Attended a secret underground party in a Queen’s cellar?",
    "Let a heated debate end in unexpected passion?",
    "Partied so hard that you forgot your own name?",
    "Played a dirty game of spin the bottle at Queen’s?",
    "Exchanged scandalous secrets with a stranger at a campus event?",
    "Experienced a night that defied Queen’s expectations?",
    "Dared to push your limits at a Queen’s house party?",
    "Spiced up a study session with flirtatious banter?",
    "Been haunted by a scandal from your Queen’s days?",
    "Flirted outrageously with a guest at a campus event?",
    "Starred in your own legendary Queen’s love story?",
    "Been swept away by a spontaneous campus romance?",
    "Taken a naughty risk to impress someone in class?",
    "Had a heated encounter in a Queen’s lecture hall?",
    "Broken the ice with a daring dorm dare?",
    "Whispered dirty secrets in a quiet campus corner?",
    "Had a hookup that defied all campus expectations?",
    "Joined a racy secret society initiation at Queen’s?",
    "Made out in an unexpected spot on campus?",
    "Been caught red-handed during a cheeky escapade?",
    "Had an encounter that became a campus legend?",
    "Transformed a Queen’s event into a naughty adventure?",
    "Flirted just to break the ice at Frosh Week?",
    "Indulged in a secret rendezvous in a hidden nook?",
    "Experienced an all-nighter that turned wildly unexpected?",
    "Exchanged flirtatious texts during a boring lecture?",
    "Played a risky game of truth or dare that got too personal?",
    "Taken a scandalous selfie that left you blushing the next day?",
    "Embarked on a midnight adventure that defied Queen’s rules?",
    "Made a bet that led to a wild, unforgettable night?",
    "Been part of a racy campus prank that went viral?",
    "Danced dangerously close to scandal at a Queen’s party?",
    "Had a secret encounter you still keep hidden?",
    "Flirted shamelessly in the Queen’s quad?",
    "Used your Queen’s ID for a wild campus dare?",
    "Been part of a night that turned into an unexpected escapade?",
    "Broken free from your comfort zone at a Queen’s bash?",
    "Played a naughty game that got a little too real?",
    "Found yourself in a scandalous situation you couldn’t explain?",
    "Had an encounter that still makes you blush?",
    "Taken part in a racy Queen’s tradition you’d never admit to?",
    "Indulged in secretive flirtation during a campus event?",
    "Felt the thrill of a taboo kiss on Queen’s grounds?",
    "Taken a daring chance that led to a messy love affair?",
    "Crossed the line between fun and scandal at Queen’s?",
    "Written your own scandalous chapter in the Queen’s legacy?",
];
